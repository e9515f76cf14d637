#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn http_transport_is_unavailable_outside_browser() {
    let request = ChatRequest {
        developer_message: String::new(),
        user_message: "hi".to_owned(),
        model: "gpt-4".to_owned(),
        api_key: "sk".to_owned(),
    };
    let result = futures::executor::block_on(HttpTransport.open("/api/chat".to_owned(), request));
    assert!(matches!(result, Err(ChatError::Unavailable)));
}
