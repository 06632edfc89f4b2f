use reqwest::Method;
use tracing::info;

use gigmarket_shared::models::Job;
use gigmarket_shared::types::JobId;

use crate::client::AdminClient;
use crate::endpoints::jobs::JobQuery;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Approve,
    Reject,
}

impl ModerationAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationAction::Approve => "approve",
            ModerationAction::Reject => "reject",
        }
    }
}

impl AdminClient {
    /// `GET /api/jobs[?status=]` with the bearer credential attached.
    pub async fn list_jobs(&self, query: &JobQuery) -> Result<Vec<Job>> {
        let req = self
            .request(Method::GET, "/api/jobs")
            .query(&query.to_pairs());
        self.fetch(req).await
    }

    /// `PUT /api/jobs/:id/approve` or `PUT /api/jobs/:id/reject`.
    pub async fn moderate_job(&self, job: &JobId, action: ModerationAction) -> Result<()> {
        let path = format!("/api/jobs/{job}/{}", action.as_str());
        self.execute(self.request(Method::PUT, &path)).await?;
        info!(job = %job, action = action.as_str(), "Job moderated");
        Ok(())
    }
}
