//! HTTP plumbing shared by every endpoint group.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};

/// Anonymous client for the marketplace backend.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Arc<str>,
}

/// Error body shapes the backend uses.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: Arc::from(config.api_base.as_str()),
        })
    }

    /// Upgrade to the authenticated capability.
    pub fn authenticated(&self, token: impl Into<String>) -> AdminClient {
        AdminClient {
            inner: self.clone(),
            token: token.into(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    /// Send and decode a JSON body.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T> {
        let resp = check_status(req.send().await?).await?;
        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send and discard whatever the backend answers with.
    pub(crate) async fn execute(&self, req: RequestBuilder) -> Result<()> {
        check_status(req.send().await?).await?;
        Ok(())
    }
}

async fn check_status(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let url = resp.url().to_string();
    let message = resp
        .bytes()
        .await
        .ok()
        .and_then(|body| serde_json::from_slice::<ErrorBody>(&body).ok())
        .and_then(|body| body.message.or(body.error));

    debug!(%url, %status, ?message, "Backend returned an error status");
    Err(ApiError::Status { status, message })
}

/// Client carrying a bearer credential.
///
/// Only moderation calls are defined on this type; everything else goes
/// through [`AdminClient::anonymous`].
#[derive(Debug, Clone)]
pub struct AdminClient {
    inner: ApiClient,
    token: String,
}

impl AdminClient {
    pub fn anonymous(&self) -> &ApiClient {
        &self.inner
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.inner.request(method, path).bearer_auth(&self.token)
    }

    pub(crate) async fn fetch<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T> {
        self.inner.fetch(req).await
    }

    pub(crate) async fn execute(&self, req: RequestBuilder) -> Result<()> {
        self.inner.execute(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let config = ClientConfig::default().with_api_base("http://backend:5000/");
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.url("/api/jobs"), "http://backend:5000/api/jobs");
    }

    #[test]
    fn test_admin_sets_bearer_header() {
        let client = ApiClient::new(&ClientConfig::default()).unwrap();
        let admin = client.authenticated("tok");

        let req = admin.request(Method::GET, "/api/jobs").build().unwrap();
        assert_eq!(
            req.headers().get("authorization").unwrap(),
            "Bearer tok"
        );

        let req = admin.anonymous().request(Method::GET, "/api/jobs").build().unwrap();
        assert!(req.headers().get("authorization").is_none());
    }
}
