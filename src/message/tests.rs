//! Unit tests for message module.

use super::*;

#[test]
fn test_messages_query_serialization_order() {
    let query = MessagesQuery {
        page: 2,
        page_size: 25,
        sort_order: true,
        filter: 0,
    };

    assert_eq!(
        serde_urlencoded::to_string(&query).unwrap(),
        "page=2&pageSize=25&sortOrder=true&filter=0"
    );
}

#[test]
fn test_send_body_omits_message_text() {
    let body = SendMessageRequest {
        recepient: 9,
        subject: "hi",
    };

    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json, serde_json::json!({"recepient": 9, "subject": "hi"}));
}

#[test]
fn test_inbox_messages_data_deserialization() {
    let json = r#"{"Status":"Ok","Data":{"Messages":["a","b"]}}"#;
    let result: ApiResult<InboxMessagesData> = serde_json::from_str(json).unwrap();

    assert_eq!(result.data.messages, vec!["a", "b"]);
}
