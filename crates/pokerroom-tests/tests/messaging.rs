//! Mail and table-chat wire-contract tests.

use pokerroom_client::{Chat, ChatApi, Message, MessageApi, MessagesQuery};
use pokerroom_tests::{MockServer, test_session};
use serde_json::json;

#[tokio::test]
async fn test_send_message_body_drops_the_text() {
    let server = MockServer::start().await;
    let message = Message::new(test_session(), &server.base_url()).unwrap();

    message.send(9, "hello", "long body text").await.unwrap();

    let recorded = server.last_request();
    assert_eq!(recorded.method, "POST");
    assert_eq!(recorded.path, "/api/messages");
    // Only the recipient id (misspelled key and all) and the subject travel.
    assert_eq!(
        recorded.body_json().unwrap(),
        json!({"recepient": 9, "subject": "hello"})
    );
}

#[tokio::test]
async fn test_inbox_and_sent_carry_full_paging_query() {
    let server = MockServer::start().await;
    server.respond_with(r#"{"Status":"Ok","Data":{"Messages":[]}}"#);
    let message = Message::new(test_session(), &server.base_url()).unwrap();

    let query = MessagesQuery {
        page: 2,
        page_size: 20,
        sort_order: true,
        filter: 0,
    };

    message.get_inbox_messages(&query).await.unwrap();
    let recorded = server.last_request();
    assert_eq!(recorded.path, "/api/messages/inbox");
    assert_eq!(
        recorded.query.as_deref(),
        Some("page=2&pageSize=20&sortOrder=true&filter=0")
    );

    message.get_sent_messages(&query).await.unwrap();
    let recorded = server.last_request();
    assert_eq!(recorded.path, "/api/messages/sent");
    assert_eq!(
        recorded.query.as_deref(),
        Some("page=2&pageSize=20&sortOrder=true&filter=0")
    );
}

#[tokio::test]
async fn test_get_message_uses_singular_path() {
    let server = MockServer::start().await;
    server.respond_with(r#"{"Status":"Ok","Data":{"Messages":["hi"]}}"#);
    let message = Message::new(test_session(), &server.base_url()).unwrap();

    let response = message.get_message(15).await.unwrap();

    assert_eq!(response.data.messages, vec!["hi"]);
    let recorded = server.last_request();
    assert_eq!(recorded.method, "GET");
    assert_eq!(recorded.path, "/api/message/15");
}

#[tokio::test]
async fn test_chat_send_posts_to_table_route() {
    let server = MockServer::start().await;
    let chat = Chat::new(test_session(), &server.base_url()).unwrap();

    chat.send(42, "nice hand").await.unwrap();

    let recorded = server.last_request();
    assert_eq!(recorded.method, "POST");
    assert_eq!(recorded.path, "/api/table/42/chat");
    assert_eq!(recorded.body_json().unwrap(), json!({"message": "nice hand"}));
}
