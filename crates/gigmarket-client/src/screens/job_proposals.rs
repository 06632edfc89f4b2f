//! Proposals a client received for one job, and hiring from them.

use tracing::{info, warn};

use gigmarket_api::ApiClient;
use gigmarket_shared::models::{Job, Proposal};
use gigmarket_shared::types::{JobId, ProposalId, UserId};

use crate::chat::ChatKey;
use crate::error::{ClientError, Result};

pub struct JobProposals {
    api: ApiClient,
    job_id: JobId,
    client_id: Option<UserId>,
    job: Option<Job>,
    proposals: Vec<Proposal>,
}

impl JobProposals {
    pub fn new(api: ApiClient, job_id: JobId) -> Self {
        Self {
            api,
            job_id,
            client_id: None,
            job: None,
            proposals: Vec::new(),
        }
    }

    pub fn set_client(&mut self, client_id: UserId) {
        self.client_id = Some(client_id);
    }

    pub fn job(&self) -> Option<&Job> {
        self.job.as_ref()
    }

    pub fn proposals(&self) -> &[Proposal] {
        &self.proposals
    }

    /// Fetch the job and its proposals concurrently.  Either failing fails
    /// the load.
    pub async fn load(&mut self) -> Result<()> {
        let (job, proposals) = futures::try_join!(
            self.api.job(&self.job_id),
            self.api.proposals(&self.job_id)
        )
        .map_err(|e| {
            warn!(job = %self.job_id, error = %e, "Failed to load job proposals");
            e
        })?;

        self.job = Some(job);
        self.proposals = proposals;
        Ok(())
    }

    /// Hiring opens a chat with the proposal's freelancer.  Unavailable
    /// until the client id is known.
    pub fn hire(&self, proposal: &ProposalId) -> Result<ChatKey> {
        let client_id = self.client_id.clone().ok_or(ClientError::NotReady("client id"))?;
        let chosen = self
            .proposals
            .iter()
            .find(|p| &p.id == proposal)
            .ok_or(ClientError::NotFound("proposal"))?;

        info!(job = %self.job_id, freelancer = %chosen.freelancer_id, "Hiring freelancer");
        Ok(ChatKey::new(
            self.job_id.clone(),
            client_id,
            chosen.freelancer_id.clone(),
        ))
    }
}
