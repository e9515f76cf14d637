//! Wall-clock helpers for message timestamps.
//!
//! Browser builds read the JS clock; SSR and native test builds fall back to
//! `SystemTime` so timestamps stay meaningful outside WASM.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current time in milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

/// Render a timestamp as a time of day.
///
/// Uses the browser locale when hydrated, `HH:MM:SS` (UTC) otherwise.
pub fn format_time(ms: f64) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ms));
        String::from(date.to_locale_time_string("default"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        format_utc_time(ms)
    }
}

#[cfg(any(test, not(feature = "hydrate")))]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn format_utc_time(ms: f64) -> String {
    let secs_of_day = (ms.max(0.0) / 1000.0) as u64 % 86_400;
    let (h, m, s) = (secs_of_day / 3600, (secs_of_day / 60) % 60, secs_of_day % 60);
    format!("{h:02}:{m:02}:{s:02}")
}
