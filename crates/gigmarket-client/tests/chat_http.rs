mod common;

use axum::http::Method;
use serde_json::json;

use common::{MockBackend, USER_ID};
use gigmarket_client::{AppState, ChatKey, ChatPhase, ClientError};
use gigmarket_shared::types::{ChatId, JobId, Role, UserId};

fn key() -> ChatKey {
    ChatKey::new(JobId::from(12), UserId::from(4), UserId::from(9))
}

#[tokio::test]
async fn test_open_locates_thread_by_triple() {
    let backend = MockBackend::start().await;
    let state = AppState::new(backend.config(), None).unwrap();
    let mut chat = state.chat(key(), Role::Client);

    assert_eq!(chat.open(None).await, &ChatPhase::Ready(ChatId::from(9)));
    assert!(chat.is_polling());

    let located = backend.requests_to(Method::GET, "/api/chats");
    assert_eq!(located.len(), 1);
    assert_eq!(located[0].query_value("jobId").as_deref(), Some("12"));
    assert_eq!(located[0].query_value("clientId").as_deref(), Some("4"));
    assert_eq!(located[0].query_value("freelancerId").as_deref(), Some("9"));

    chat.close().await;
    assert!(!chat.is_polling());
}

#[tokio::test]
async fn test_send_uses_role_sender_and_marks_mine() {
    let backend = MockBackend::start().await;
    backend.with_store(|s| {
        s.messages.push(json!({
            "id": 1, "sender_id": 9, "content": "Hi there",
            "created_at": "2025-03-04T09:00:00Z"
        }))
    });
    let state = AppState::new(backend.config(), None).unwrap();
    let mut chat = state.chat(key(), Role::Client);
    chat.open(None).await;

    chat.set_draft("   ");
    let err = chat.send().await.unwrap_err();
    assert!(err.is_validation());
    assert!(backend
        .requests_to(Method::POST, "/api/chats/9/messages")
        .is_empty());

    chat.set_draft("When can you start?");
    chat.send().await.unwrap();
    assert_eq!(chat.draft(), "");

    let posts = backend.requests_to(Method::POST, "/api/chats/9/messages");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].body["senderId"], 4);
    assert_eq!(posts[0].body["content"], "When can you start?");

    let messages = chat.messages().await;
    assert_eq!(messages.len(), 2);
    assert!(!messages[0].mine);
    assert!(messages[1].mine);
    assert_eq!(messages[1].content, "When can you start?");

    chat.close().await;
}

#[tokio::test]
async fn test_missing_client_resolved_once_from_email() {
    let backend = MockBackend::start().await;
    let mut state = AppState::new(backend.config(), Some("sam@example.com".into())).unwrap();
    assert_eq!(state.user_id().await.unwrap(), UserId::from(USER_ID));

    let mut key = key();
    key.client_id = None;
    let mut chat = state.chat(key, Role::Client);

    assert_eq!(chat.open(None).await, &ChatPhase::Deferred);
    assert!(matches!(chat.send().await, Err(ClientError::Deferred)));
    assert!(backend.requests_to(Method::GET, "/api/chats").is_empty());

    chat.open(Some("sam@example.com")).await;
    let located = backend.requests_to(Method::GET, "/api/chats");
    assert_eq!(located.len(), 1);
    assert_eq!(located[0].query_value("clientId").as_deref(), Some("5"));
    assert_eq!(located[0].query_value("freelancerId").as_deref(), Some("9"));
    assert_eq!(backend.requests_to(Method::POST, "/api/getUserId").len(), 1);
    chat.close().await;
}

#[tokio::test]
async fn test_freelancer_without_client_stays_deferred() {
    let backend = MockBackend::start().await;
    let mut state = AppState::new(backend.config(), Some("sam@example.com".into())).unwrap();
    let me = state.user_id().await.unwrap();

    let key = ChatKey {
        job_id: Some(JobId::from(12)),
        client_id: None,
        freelancer_id: Some(me),
    };
    let mut chat = state.chat(key, Role::Freelancer);

    assert_eq!(chat.open(Some("sam@example.com")).await, &ChatPhase::Deferred);
    assert_eq!(chat.key().client_id, None);
    assert!(backend.requests_to(Method::GET, "/api/chats").is_empty());
}

#[tokio::test]
async fn test_admin_needs_token() {
    let backend = MockBackend::start().await;
    let state = AppState::new(backend.config(), None).unwrap();
    assert!(matches!(state.admin(), Err(ClientError::NotReady(_))));
}
