use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::state::session::SessionState;

fn keyed() -> Settings {
    Settings { api_key: "sk-test".to_owned(), ..Settings::default() }
}

fn store_with(draft: &str) -> Rc<RefCell<SessionState>> {
    Rc::new(RefCell::new(SessionState { draft: draft.to_owned(), ..SessionState::default() }))
}

// =============================================================
// classify_key
// =============================================================

#[test]
fn plain_enter_submits() {
    assert_eq!(classify_key(KeyPress::plain("Enter")), ComposerKey::Submit);
}

#[test]
fn shift_enter_is_newline() {
    assert_eq!(classify_key(KeyPress::shifted("Enter")), ComposerKey::Newline);
}

#[test]
fn enter_with_other_modifiers_submits() {
    let pressed = [
        KeyPress { key: "Enter", alt: true, ..KeyPress::default() },
        KeyPress { key: "Enter", ctrl: true, ..KeyPress::default() },
        KeyPress { key: "Enter", meta: true, ..KeyPress::default() },
    ];
    for press in pressed {
        assert_eq!(classify_key(press), ComposerKey::Submit, "{press:?}");
    }
}

#[test]
fn enter_while_composing_is_ignored() {
    let press = KeyPress { key: "Enter", composing: true, ..KeyPress::default() };
    assert_eq!(classify_key(press), ComposerKey::Ignore);

    let shifted = KeyPress { composing: true, ..KeyPress::shifted("Enter") };
    assert_eq!(classify_key(shifted), ComposerKey::Ignore);
}

#[test]
fn other_keys_are_ignored() {
    assert_eq!(classify_key(KeyPress::plain("a")), ComposerKey::Ignore);
    assert_eq!(classify_key(KeyPress::shifted("Tab")), ComposerKey::Ignore);
}

// =============================================================
// on_composer_key
// =============================================================

#[test]
fn enter_with_content_and_key_submits_once() {
    let store = store_with("hello");

    let first = on_composer_key(&store, &keyed(), KeyPress::plain("Enter"));
    let second = on_composer_key(&store, &keyed(), KeyPress::plain("Enter"));

    assert!(matches!(first, KeyOutcome::Sent(ref req) if req.user_message == "hello"));
    assert_eq!(second, KeyOutcome::Refused);
    assert!(second.prevents_default());

    let state = store.borrow();
    assert_eq!(state.messages.len(), 1);
    assert!(state.draft.is_empty());
    assert!(state.awaiting_response);
}

#[test]
fn ctrl_enter_sends_the_draft() {
    let store = store_with("hello");
    let press = KeyPress { key: "Enter", ctrl: true, ..KeyPress::default() };

    let outcome = on_composer_key(&store, &keyed(), press);

    assert!(matches!(outcome, KeyOutcome::Sent(_)));
    assert_eq!(store.borrow().messages.len(), 1);
}

#[test]
fn shift_enter_leaves_the_event_to_the_textarea() {
    let store = store_with("line one");

    let outcome = on_composer_key(&store, &keyed(), KeyPress::shifted("Enter"));

    assert_eq!(outcome, KeyOutcome::Default);
    assert!(!outcome.prevents_default());
    let state = store.borrow();
    assert!(state.messages.is_empty());
    assert!(!state.awaiting_response);
    assert_eq!(state.draft, "line one");
}

#[test]
fn composing_enter_does_not_submit_partial_draft() {
    let store = store_with("\u{4f60}");
    let press = KeyPress { key: "Enter", composing: true, ..KeyPress::default() };

    let outcome = on_composer_key(&store, &keyed(), press);

    assert_eq!(outcome, KeyOutcome::Default);
    assert!(store.borrow().messages.is_empty());
    assert_eq!(store.borrow().draft, "\u{4f60}");
}

#[test]
fn enter_without_api_key_never_submits() {
    for draft in ["hello", "  padded  ", "multi\nline"] {
        let store = store_with(draft);
        let outcome = on_composer_key(&store, &Settings::default(), KeyPress::plain("Enter"));
        assert_eq!(outcome, KeyOutcome::Refused);
        assert!(store.borrow().messages.is_empty());
        assert_eq!(store.borrow().draft, draft);
    }
}

#[test]
fn enter_with_blank_draft_never_submits() {
    let store = store_with("   ");
    assert_eq!(on_composer_key(&store, &keyed(), KeyPress::plain("Enter")), KeyOutcome::Refused);
    assert!(store.borrow().messages.is_empty());
}
