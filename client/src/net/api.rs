//! HTTP transport for the streaming chat endpoint.
//!
//! Client-side (hydrate): `POST` via `gloo-net`, then the response body's
//! `ReadableStream` is read one chunk at a time through `web-sys`.
//! Server-side (SSR) and native builds: `open` fails with
//! `ChatError::Unavailable` since the exchange only happens in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as a typed `ChatError`. Callers decide how much
//! of it to surface; the dispatcher only logs it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use futures::future::LocalBoxFuture;
use futures::stream::LocalBoxStream;

use super::types::{ChatError, ChatRequest};

/// Raw body chunks in arrival order.
pub type ChunkStream = LocalBoxStream<'static, Result<Vec<u8>, ChatError>>;

/// Opens a chat exchange and hands back its body as a chunk stream.
pub trait ChatTransport {
    /// Send `request` to `url`. Resolves once response headers are in and the
    /// status is a success; the body is consumed through the returned stream.
    fn open(&self, url: String, request: ChatRequest) -> LocalBoxFuture<'_, Result<ChunkStream, ChatError>>;
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

impl ChatTransport for HttpTransport {
    fn open(&self, url: String, request: ChatRequest) -> LocalBoxFuture<'_, Result<ChunkStream, ChatError>> {
        Box::pin(open_stream(url, request))
    }
}

async fn open_stream(url: String, request: ChatRequest) -> Result<ChunkStream, ChatError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&url)
            .json(&request)
            .map_err(|e| ChatError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ChatError::Status(resp.status()));
        }
        let body = resp.as_raw().body().ok_or(ChatError::MissingBody)?;
        Ok(body_chunks(body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, request);
        Err(ChatError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn body_chunks(body: web_sys::ReadableStream) -> ChunkStream {
    use wasm_bindgen::JsCast;

    let reader: web_sys::ReadableStreamDefaultReader = body.get_reader().unchecked_into();
    Box::pin(futures::stream::unfold(Some(reader), |reader| async move {
        let reader = reader?;
        match read_chunk(&reader).await {
            Ok(Some(bytes)) => Some((Ok(bytes), Some(reader))),
            Ok(None) => None,
            // Yield the error once, then end the stream.
            Err(err) => Some((Err(err), None)),
        }
    }))
}

/// Read one chunk. `Ok(None)` means the stream reported `done`.
#[cfg(feature = "hydrate")]
async fn read_chunk(reader: &web_sys::ReadableStreamDefaultReader) -> Result<Option<Vec<u8>>, ChatError> {
    use wasm_bindgen::{JsCast, JsValue};

    let read_err = |e: JsValue| ChatError::Read(format!("{e:?}"));

    let result = wasm_bindgen_futures::JsFuture::from(reader.read())
        .await
        .map_err(read_err)?;
    let done = js_sys::Reflect::get(&result, &JsValue::from_str("done"))
        .map_err(read_err)?
        .as_bool()
        .unwrap_or(true);
    if done {
        return Ok(None);
    }

    let value = js_sys::Reflect::get(&result, &JsValue::from_str("value")).map_err(read_err)?;
    let bytes = value
        .dyn_into::<js_sys::Uint8Array>()
        .map_err(|_| ChatError::Read("chunk is not a Uint8Array".to_owned()))?;
    Ok(Some(bytes.to_vec()))
}
