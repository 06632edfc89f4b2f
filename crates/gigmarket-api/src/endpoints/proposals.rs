use reqwest::Method;
use serde::Deserialize;
use tracing::info;

use gigmarket_shared::models::{NewProposal, Proposal};
use gigmarket_shared::types::JobId;

use crate::client::ApiClient;
use crate::error::Result;

#[derive(Deserialize)]
struct SubmitResponse {
    #[serde(default)]
    message: Option<String>,
}

impl ApiClient {
    /// `GET /api/jobs/:id/proposals`
    pub async fn proposals(&self, job: &JobId) -> Result<Vec<Proposal>> {
        let req = self.request(Method::GET, &format!("/api/jobs/{job}/proposals"));
        self.fetch(req).await
    }

    /// `POST /api/jobs/:id/proposals`.  Returns the backend's confirmation
    /// message, if any.
    pub async fn submit_proposal(&self, job: &JobId, proposal: &NewProposal) -> Result<Option<String>> {
        let req = self
            .request(Method::POST, &format!("/api/jobs/{job}/proposals"))
            .json(proposal);
        let resp: SubmitResponse = self.fetch(req).await?;
        info!(job = %job, freelancer = %proposal.freelancer_id, bid = proposal.bid, "Proposal submitted");
        Ok(resp.message)
    }
}
