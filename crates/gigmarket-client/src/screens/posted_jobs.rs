//! Jobs the signed-in client has posted.

use tracing::{debug, warn};

use gigmarket_api::{ApiClient, JobQuery};
use gigmarket_shared::models::Job;
use gigmarket_shared::types::UserId;

use crate::error::{ClientError, Result};

pub struct PostedJobs {
    api: ApiClient,
    client_id: Option<UserId>,
    jobs: Vec<Job>,
}

impl PostedJobs {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            client_id: None,
            jobs: Vec::new(),
        }
    }

    pub fn set_client(&mut self, client_id: UserId) {
        self.client_id = Some(client_id);
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// The backend has no owner filter, so every job is fetched and the
    /// client's own are kept.
    pub async fn refresh(&mut self) -> Result<()> {
        let client_id = self.client_id.as_ref().ok_or(ClientError::NotReady("client id"))?;
        let all = self.api.list_jobs(&JobQuery::default()).await.map_err(|e| {
            warn!(client = %client_id, error = %e, "Failed to fetch posted jobs");
            e
        })?;

        self.jobs = all
            .into_iter()
            .filter(|job| job.client_id.as_ref() == Some(client_id))
            .collect();
        debug!(client = %client_id, count = self.jobs.len(), "Posted jobs loaded");
        Ok(())
    }
}
