//! In-process marketplace backend for contract tests.
//!
//! Every request is recorded; responses come from a small in-memory store
//! seeded with a few jobs.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{json, Value};

use gigmarket_api::ClientConfig;

pub const ADMIN_TOKEN: &str = "let-me-in";
pub const USER_ID: u64 = 5;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    /// Decoded query pairs, in request order.
    pub query: Vec<(String, String)>,
    pub authorization: Option<String>,
    pub body: Value,
}

impl Recorded {
    pub fn query_value(&self, key: &str) -> Option<String> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }
}

pub struct Store {
    pub requests: Vec<Recorded>,
    pub jobs: Vec<Value>,
    pub proposals: Vec<Value>,
    pub connects: i64,
    pub wallet: f64,
    pub profile: Option<Value>,
    pub messages: Vec<Value>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            requests: Vec::new(),
            jobs: vec![
                job(7, "Logo design", "pending", 3),
                job(8, "Landing page", "approved", 3),
                job(12, "Rust service", "approved", 4),
                job(13, "Spam", "rejected", 4),
            ],
            proposals: vec![json!({
                "id": 1, "job_id": 12, "freelancer_id": 9,
                "proposal_content": "Hire me", "timeline": "5 days", "bid": "300.00"
            })],
            connects: 7,
            wallet: 120.5,
            profile: None,
            messages: Vec::new(),
        }
    }
}

pub fn job(id: u64, title: &str, status: &str, client: u64) -> Value {
    json!({
        "id": id, "title": title, "description": "", "skills_required": "rust, sql",
        "budget": "250.00", "status": status, "client_id": client
    })
}

pub type Shared = Arc<Mutex<Store>>;

pub struct MockBackend {
    pub addr: SocketAddr,
    pub store: Shared,
}

impl MockBackend {
    pub async fn start() -> Self {
        let store: Shared = Arc::new(Mutex::new(Store::default()));
        let app = Router::new().fallback(handle).with_state(store.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, store }
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::default().with_api_base(&format!("http://{}", self.addr))
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.store.lock().unwrap().requests.clone()
    }

    pub fn requests_to(&self, method: Method, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    pub fn clear_requests(&self) {
        self.store.lock().unwrap().requests.clear();
    }

    pub fn with_store<T>(&self, f: impl FnOnce(&mut Store) -> T) -> T {
        f(&mut self.store.lock().unwrap())
    }
}

async fn handle(
    State(store): State<Shared>,
    method: Method,
    uri: Uri,
    Query(query): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let recorded = Recorded {
        method: method.clone(),
        path: uri.path().to_string(),
        query,
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(String::from),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    };

    let mut store = store.lock().unwrap();
    store.requests.push(recorded.clone());
    let (status, value) = route(&mut store, &recorded);
    (status, Json(value)).into_response()
}

fn route(store: &mut Store, req: &Recorded) -> (StatusCode, Value) {
    let segments: Vec<&str> = req.path.trim_start_matches('/').split('/').collect();

    match (req.method.as_str(), segments.as_slice()) {
        ("POST", ["api", "getUserId"]) => {
            (StatusCode::OK, json!({ "userId": USER_ID }))
        }

        ("GET", ["api", "categories", "getAllCategories"]) => (
            StatusCode::OK,
            json!([{ "id": 1, "name": "Design" }, { "id": 2, "name": "Development" }]),
        ),

        ("GET", ["api", "jobs"]) => {
            let status = req.query_value("status");
            let jobs: Vec<Value> = store
                .jobs
                .iter()
                .filter(|j| status.as_deref().map_or(true, |s| j["status"] == s))
                .cloned()
                .collect();
            (StatusCode::OK, Value::Array(jobs))
        }
        ("POST", ["api", "jobs"]) => (StatusCode::CREATED, json!({ "message": "Job created" })),
        ("GET", ["api", "jobs", id]) => match find_job(store, id) {
            Some(job) => (StatusCode::OK, job.clone()),
            None => (StatusCode::NOT_FOUND, json!({ "message": "Job not found" })),
        },
        ("PUT", ["api", "jobs", id, action]) => {
            let expected = format!("Bearer {ADMIN_TOKEN}");
            if req.authorization.as_deref() != Some(expected.as_str()) {
                return (StatusCode::UNAUTHORIZED, json!({ "message": "Unauthorized" }));
            }
            let status = match *action {
                "approve" => "approved",
                "reject" => "rejected",
                _ => return (StatusCode::NOT_FOUND, Value::Null),
            };
            match store.jobs.iter_mut().find(|j| j["id"].to_string() == *id) {
                Some(job) => {
                    job["status"] = json!(status);
                    (StatusCode::OK, job.clone())
                }
                None => (StatusCode::NOT_FOUND, json!({ "message": "Job not found" })),
            }
        }
        ("GET", ["api", "jobs", id, "proposals"]) => {
            let proposals: Vec<Value> = store
                .proposals
                .iter()
                .filter(|p| p["job_id"].to_string() == *id)
                .cloned()
                .collect();
            (StatusCode::OK, Value::Array(proposals))
        }
        ("POST", ["api", "jobs", _, "proposals"]) => (
            StatusCode::CREATED,
            json!({ "message": "Proposal submitted" }),
        ),

        ("GET", ["api", "payments", "connects"]) => {
            (StatusCode::OK, json!({ "balance": store.connects }))
        }
        ("POST", ["api", "payments", "connects", "purchase"]) => {
            let amount = req.body["packageDetails"]["amount"].as_i64().unwrap_or(0);
            store.connects += amount;
            (StatusCode::OK, json!({ "connects": { "balance": store.connects } }))
        }
        ("GET", ["api", "payments", "transactions"]) => (
            StatusCode::OK,
            json!([{
                "id": 1, "transaction_type": "connect_purchase",
                "details": "{\"amount\": 10}", "transaction_date": "2025-03-04T10:00:00Z"
            }]),
        ),
        ("GET", ["api", "balances"]) => (
            StatusCode::OK,
            json!({ "available_amount": format!("{:.2}", store.wallet) }),
        ),
        ("POST", ["api", "balances", "add"]) => {
            store.wallet += req.body["amount"].as_f64().unwrap_or(0.0);
            (
                StatusCode::OK,
                json!({ "balance": { "available_amount": format!("{:.2}", store.wallet) } }),
            )
        }

        ("GET", ["api", "profiles", _]) => match &store.profile {
            Some(profile) => (
                StatusCode::OK,
                json!({ "profile": profile, "portfolioItems": [] }),
            ),
            None => (StatusCode::NOT_FOUND, json!({ "message": "Profile not found" })),
        },
        ("POST", ["api", "profiles"]) => {
            let mut profile = req.body.clone();
            profile["user_id"] = profile["userId"].clone();
            store.profile = Some(profile.clone());
            (StatusCode::CREATED, json!({ "profile": profile }))
        }
        ("PUT", ["api", "profiles", _]) => {
            let mut profile = store.profile.clone().unwrap_or_else(|| json!({}));
            if let (Some(target), Some(patch)) = (profile.as_object_mut(), req.body.as_object()) {
                for (k, v) in patch {
                    target.insert(k.clone(), v.clone());
                }
            }
            store.profile = Some(profile.clone());
            (StatusCode::OK, json!({ "profile": profile }))
        }
        ("DELETE", ["api", "profiles", _]) => {
            store.profile = None;
            (StatusCode::OK, json!({ "message": "Profile deleted" }))
        }
        ("POST", ["api", "profiles", _, "portfolio"]) => (
            StatusCode::CREATED,
            json!({ "portfolioItem": {
                "id": 31,
                "project_title": req.body["projectTitle"],
                "description": req.body["description"],
                "media_links": req.body["mediaLinks"]
            }}),
        ),
        ("GET", ["api", "digital-products"]) => (StatusCode::OK, json!([])),
        ("GET", ["api", "work-history", _]) => (StatusCode::OK, json!([])),
        ("POST", ["api", "work-history"]) => (
            StatusCode::CREATED,
            json!({
                "id": 41,
                "company_name": req.body["companyName"],
                "position": req.body["position"],
                "start_date": req.body["startDate"],
                "end_date": req.body["endDate"],
                "is_current": req.body["isCurrent"]
            }),
        ),

        ("GET", ["api", "chats"]) => (
            StatusCode::OK,
            json!({ "id": 9, "messages": store.messages }),
        ),
        ("GET", ["api", "chats", _, "messages"]) => {
            (StatusCode::OK, Value::Array(store.messages.clone()))
        }
        ("POST", ["api", "chats", _, "messages"]) => {
            let message = json!({
                "id": store.messages.len() + 1,
                "sender_id": req.body["senderId"],
                "content": req.body["content"],
                "created_at": "2025-03-04T10:00:00Z"
            });
            store.messages.push(message.clone());
            (StatusCode::CREATED, message)
        }

        _ => (StatusCode::NOT_FOUND, json!({ "message": "No such route" })),
    }
}

fn find_job<'a>(store: &'a Store, id: &str) -> Option<&'a Value> {
    store.jobs.iter().find(|j| j["id"].to_string() == id)
}
