mod common;

use axum::http::Method;

use common::{MockBackend, USER_ID};
use gigmarket_api::ApiClient;
use gigmarket_client::screens::job_board::JobBoard;
use gigmarket_client::screens::posted_jobs::PostedJobs;
use gigmarket_shared::types::{CategoryId, ExperienceLevel, JobId, JobType, ProposalBucket, UserId};

fn job_fetches(backend: &MockBackend) -> usize {
    backend.requests_to(Method::GET, "/api/jobs").len()
}

#[tokio::test]
async fn test_each_filter_change_fetches_once() {
    let backend = MockBackend::start().await;
    let mut board = JobBoard::new(ApiClient::new(&backend.config()).unwrap());
    board.refresh().await.unwrap();
    assert_eq!(job_fetches(&backend), 1);

    assert!(board.set_search("rust").await.unwrap());
    assert_eq!(job_fetches(&backend), 2);
    assert!(board.toggle_experience(ExperienceLevel::Entry).await.unwrap());
    assert_eq!(job_fetches(&backend), 3);
    assert!(board.set_job_type(JobType::Fixed).await.unwrap());
    assert_eq!(job_fetches(&backend), 4);
    assert!(board.toggle_proposals(ProposalBucket::TenToTwenty).await.unwrap());
    assert_eq!(job_fetches(&backend), 5);
    assert!(board.set_category(Some(CategoryId::from(2))).await.unwrap());
    assert_eq!(job_fetches(&backend), 6);

    let last = backend.requests_to(Method::GET, "/api/jobs").pop().unwrap();
    assert_eq!(last.query_value("search").as_deref(), Some("rust"));
    assert_eq!(last.query_value("experienceLevel").as_deref(), Some("Entry Level"));
    assert_eq!(last.query_value("jobType").as_deref(), Some("Fixed"));
    assert_eq!(last.query_value("proposals").as_deref(), Some("10_to_20"));
    assert_eq!(last.query_value("category_id").as_deref(), Some("2"));
    assert_eq!(last.query_value("location"), None);
}

#[tokio::test]
async fn test_unchanged_filter_does_not_refetch() {
    let backend = MockBackend::start().await;
    let mut board = JobBoard::new(ApiClient::new(&backend.config()).unwrap());

    assert!(board.set_location("Lahore").await.unwrap());
    assert!(!board.set_location("Lahore").await.unwrap());
    assert!(!board.set_job_type(JobType::Hourly).await.unwrap());
    assert_eq!(job_fetches(&backend), 1);
}

#[tokio::test]
async fn test_only_approved_jobs_with_counts() {
    let backend = MockBackend::start().await;
    let mut board = JobBoard::new(ApiClient::new(&backend.config()).unwrap());
    board.refresh().await.unwrap();

    let visible: Vec<_> = board.visible_jobs().map(|j| j.id.clone()).collect();
    assert_eq!(visible, vec![JobId::from(8), JobId::from(12)]);
    assert_eq!(board.proposal_count(&JobId::from(12)), Some(1));
    assert_eq!(board.proposal_count(&JobId::from(8)), Some(0));
    assert_eq!(board.proposal_count(&JobId::from(7)), None);
}

#[tokio::test]
async fn test_categories_and_connects() {
    let backend = MockBackend::start().await;
    let mut board = JobBoard::new(ApiClient::new(&backend.config()).unwrap());

    board.load_categories().await;
    board.load_categories().await;
    assert_eq!(board.categories().len(), 2);
    assert_eq!(
        backend
            .requests_to(Method::GET, "/api/categories/getAllCategories")
            .len(),
        1
    );

    board.load_connects(&UserId::from(USER_ID)).await;
    assert_eq!(board.connects(), Some(7));
}

#[tokio::test]
async fn test_posted_jobs_keep_own_only() {
    let backend = MockBackend::start().await;
    let mut posted = PostedJobs::new(ApiClient::new(&backend.config()).unwrap());
    assert!(posted.refresh().await.is_err());
    assert!(backend.requests().is_empty());

    posted.set_client(UserId::from(3));
    posted.refresh().await.unwrap();
    let ids: Vec<_> = posted.jobs().iter().map(|j| j.id.clone()).collect();
    assert_eq!(ids, vec![JobId::from(7), JobId::from(8)]);
}
