mod common;

use axum::http::Method;

use common::{MockBackend, USER_ID};
use gigmarket_api::ApiClient;
use gigmarket_client::screens::post_job::PostJobScreen;
use gigmarket_client::screens::wallet::Wallet;
use gigmarket_client::ClientError;
use gigmarket_shared::types::{CategoryId, UserId};

async fn wallet(backend: &MockBackend) -> Wallet {
    let api = ApiClient::new(&backend.config()).unwrap();
    let mut wallet = Wallet::new(api);
    wallet.set_user(UserId::from(USER_ID));
    wallet
}

#[tokio::test]
async fn test_purchase_shows_server_balance() {
    let backend = MockBackend::start().await;
    let mut wallet = wallet(&backend).await;

    let balance = wallet.purchase_connects("10").await.unwrap();
    // the mock started at 7, so only the server's number gives 17
    assert_eq!(balance, 17);
    assert_eq!(wallet.connects(), Some(17));

    let posts = backend.requests_to(Method::POST, "/api/payments/connects/purchase");
    assert_eq!(posts.len(), 1);
    let details = &posts[0].body["packageDetails"];
    assert_eq!(details["amount"], 10);
    assert_eq!(details["price"].as_f64(), Some(5.0));
    assert_eq!(posts[0].body["userId"], USER_ID);

    // history refreshed after the purchase
    assert_eq!(backend.requests_to(Method::GET, "/api/payments/transactions").len(), 1);
    let row = &wallet.history()[0];
    assert_eq!((row.sign, row.quantity), ('+', 10));
    assert_eq!(row.label, "Connects purchased");
}

#[tokio::test]
async fn test_bad_quantity_sends_nothing() {
    let backend = MockBackend::start().await;
    let mut wallet = wallet(&backend).await;

    for qty in ["0", "-1", "2.5", "ten"] {
        assert!(wallet.purchase_connects(qty).await.unwrap_err().is_validation());
    }
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_load_and_add_funds() {
    let backend = MockBackend::start().await;
    let mut wallet = wallet(&backend).await;

    wallet.load().await.unwrap();
    assert_eq!(wallet.connects(), Some(7));
    assert_eq!(wallet.balance(), Some(120.5));
    assert_eq!(wallet.history().len(), 1);

    assert_eq!(wallet.add_funds("49.50").await.unwrap(), 170.0);
    assert_eq!(wallet.balance(), Some(170.0));
    assert!(wallet.add_funds("0").await.unwrap_err().is_validation());
    assert_eq!(backend.requests_to(Method::POST, "/api/balances/add").len(), 1);
}

#[tokio::test]
async fn test_wallet_needs_user() {
    let backend = MockBackend::start().await;
    let api = ApiClient::new(&backend.config()).unwrap();
    let mut wallet = Wallet::new(api);

    assert!(matches!(wallet.load().await, Err(ClientError::NotReady(_))));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_post_job_checks_balance_before_posting() {
    let backend = MockBackend::start().await;
    let api = ApiClient::new(&backend.config()).unwrap();

    let mut screen = PostJobScreen::new(api);
    screen.load_categories().await;
    assert_eq!(screen.draft().category, Some(CategoryId::from(1)));
    screen.set_client(UserId::from(USER_ID)).await;
    assert_eq!(screen.balance(), Some(120.5));

    let draft = screen.draft_mut();
    draft.title = "API work".into();
    draft.description = "Build an API".into();
    draft.budget = "500".into();
    draft.add_skill("rust");

    let err = screen.submit().await.unwrap_err();
    assert!(err.is_validation());
    assert!(backend.requests_to(Method::POST, "/api/jobs").is_empty());

    screen.add_funds("400").await.unwrap();
    screen.submit().await.unwrap();

    let posts = backend.requests_to(Method::POST, "/api/jobs");
    assert_eq!(posts.len(), 1);
    let body = &posts[0].body;
    assert_eq!(body["clientId"], USER_ID);
    assert_eq!(body["category_id"], 1);
    assert_eq!(body["skills_required"], "rust");
    assert_eq!(body["location"], "Remote");
    assert_eq!(body["jobType"], "Hourly");
    assert_eq!(body["experienceLevel"], "Expert");

    // the form resets after a successful post
    assert!(screen.draft().title.is_empty());
    assert!(screen.draft().skills().is_empty());
}
