mod common;

use axum::http::Method;

use common::{MockBackend, ADMIN_TOKEN};
use gigmarket_api::ApiClient;
use gigmarket_client::screens::moderation::{ModerationBoard, StatusTab};
use gigmarket_shared::types::JobId;

#[tokio::test]
async fn test_approved_job_leaves_pending_tab() {
    let backend = MockBackend::start().await;
    let admin = ApiClient::new(&backend.config())
        .unwrap()
        .authenticated(ADMIN_TOKEN);

    let mut board = ModerationBoard::new(admin);
    assert!(board.select_tab(StatusTab::Pending).await.unwrap());
    assert!(board.jobs().iter().any(|j| j.id == JobId::from(7)));

    board.approve(&JobId::from(7)).await.unwrap();
    assert!(board.jobs().iter().all(|j| j.id != JobId::from(7)));

    let puts = backend.requests_to(Method::PUT, "/api/jobs/7/approve");
    assert_eq!(puts.len(), 1);
    assert_eq!(
        puts[0].authorization.as_deref(),
        Some(format!("Bearer {ADMIN_TOKEN}").as_str())
    );

    // every moderation request carried the credential
    for req in backend.requests() {
        assert!(req.authorization.is_some(), "{} {} had no bearer", req.method, req.path);
    }
}

#[tokio::test]
async fn test_tab_filters_by_status() {
    let backend = MockBackend::start().await;
    let admin = ApiClient::new(&backend.config()).unwrap().authenticated(ADMIN_TOKEN);

    let mut board = ModerationBoard::new(admin);
    board.refresh().await.unwrap();
    assert_eq!(board.jobs().len(), 4);
    assert_eq!(backend.requests()[0].query_value("status"), None);

    board.select_tab(StatusTab::Rejected).await.unwrap();
    assert_eq!(board.jobs().len(), 1);
    assert!(!board.select_tab(StatusTab::Rejected).await.unwrap());

    let lists = backend.requests_to(Method::GET, "/api/jobs");
    assert_eq!(lists.len(), 2);
    assert_eq!(lists[1].query_value("status").as_deref(), Some("rejected"));
}

#[tokio::test]
async fn test_failed_action_still_refreshes() {
    let backend = MockBackend::start().await;
    let wrong = ApiClient::new(&backend.config()).unwrap().authenticated("nope");

    let mut board = ModerationBoard::new(wrong);
    assert!(board.reject(&JobId::from(7)).await.is_err());

    assert_eq!(backend.requests_to(Method::GET, "/api/jobs").len(), 1);
    let job = board.jobs().iter().find(|j| j.id == JobId::from(7)).unwrap();
    assert_eq!(job.status.as_str(), "pending");
}

#[tokio::test]
async fn test_anonymous_calls_carry_no_credential() {
    let backend = MockBackend::start().await;
    let api = ApiClient::new(&backend.config()).unwrap();

    api.list_jobs(&Default::default()).await.unwrap();
    api.user_id_for_email("someone@example.com").await.unwrap();

    let requests = backend.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.authorization.is_none()));
}
