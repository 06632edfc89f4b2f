//! Freelancer proposal submission.

use tracing::{info, warn};

use gigmarket_api::ApiClient;
use gigmarket_shared::models::{Job, NewProposal};
use gigmarket_shared::types::{JobId, UserId};
use gigmarket_shared::{validate, ValidationError};

use crate::error::{ClientError, Result};

/// The proposal form as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProposalDraft {
    pub content: String,
    pub timeline: String,
    pub bid: String,
}

impl ProposalDraft {
    /// Content must be non-empty, the timeline one of the offered options
    /// and the bid a positive number.
    pub fn validate(&self, freelancer: &UserId) -> std::result::Result<NewProposal, ValidationError> {
        let content = validate::required("Proposal content", &self.content)?;
        let timeline = validate::timeline(&self.timeline)?;
        let bid = validate::bid(&self.bid)?;
        Ok(NewProposal {
            freelancer_id: freelancer.to_string(),
            proposal_content: content.to_string(),
            timeline: timeline.to_string(),
            bid,
        })
    }
}

pub struct ApplyScreen {
    api: ApiClient,
    job_id: JobId,
    freelancer_id: Option<UserId>,
    job: Option<Job>,
    has_submitted: bool,
    draft: ProposalDraft,
}

impl ApplyScreen {
    pub fn new(api: ApiClient, job_id: JobId) -> Self {
        Self {
            api,
            job_id,
            freelancer_id: None,
            job: None,
            has_submitted: false,
            draft: ProposalDraft::default(),
        }
    }

    pub fn job(&self) -> Option<&Job> {
        self.job.as_ref()
    }

    pub fn has_submitted(&self) -> bool {
        self.has_submitted
    }

    pub fn draft(&self) -> &ProposalDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ProposalDraft {
        &mut self.draft
    }

    pub async fn load_job(&mut self) -> Result<()> {
        match self.api.job(&self.job_id).await {
            Ok(job) => {
                self.job = Some(job);
                Ok(())
            }
            Err(e) => {
                warn!(job = %self.job_id, error = %e, "Failed to load job");
                Err(e.into())
            }
        }
    }

    /// Record the freelancer and check whether they already applied.
    pub async fn set_freelancer(&mut self, freelancer_id: UserId) -> Result<bool> {
        let proposals = self.api.proposals(&self.job_id).await?;
        self.has_submitted = proposals.iter().any(|p| p.freelancer_id == freelancer_id);
        self.freelancer_id = Some(freelancer_id);
        Ok(self.has_submitted)
    }

    /// Validate and post the draft.  Returns the confirmation to show.
    pub async fn submit(&mut self) -> Result<String> {
        if self.has_submitted {
            return Err(ClientError::AlreadySubmitted);
        }
        let freelancer_id = self
            .freelancer_id
            .as_ref()
            .ok_or(ClientError::NotReady("freelancer id"))?;
        let proposal = self.draft.validate(freelancer_id)?;

        let message = self
            .api
            .submit_proposal(&self.job_id, &proposal)
            .await
            .map_err(|e| {
                warn!(job = %self.job_id, error = %e, "Proposal submission failed");
                e
            })?;

        info!(job = %self.job_id, "Proposal accepted");
        self.draft = ProposalDraft::default();
        self.has_submitted = true;
        Ok(message.unwrap_or_else(|| "Proposal submitted successfully!".to_string()))
    }
}
