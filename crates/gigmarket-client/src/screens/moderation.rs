//! Admin job moderation.  Only reachable with an [`AdminClient`].

use tracing::warn;

use gigmarket_api::endpoints::moderation::ModerationAction;
use gigmarket_api::{AdminClient, JobQuery};
use gigmarket_shared::models::Job;
use gigmarket_shared::types::{JobId, JobStatus};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTab {
    #[default]
    All,
    Approved,
    Pending,
    Rejected,
}

impl StatusTab {
    pub const TABS: [StatusTab; 4] = [
        StatusTab::All,
        StatusTab::Approved,
        StatusTab::Pending,
        StatusTab::Rejected,
    ];

    pub fn status(self) -> Option<JobStatus> {
        match self {
            StatusTab::All => None,
            StatusTab::Approved => Some(JobStatus::Approved),
            StatusTab::Pending => Some(JobStatus::Pending),
            StatusTab::Rejected => Some(JobStatus::Rejected),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusTab::All => "All",
            StatusTab::Approved => "Approved",
            StatusTab::Pending => "Pending",
            StatusTab::Rejected => "Rejected",
        }
    }
}

pub struct ModerationBoard {
    admin: AdminClient,
    tab: StatusTab,
    jobs: Vec<Job>,
    error: Option<String>,
}

impl ModerationBoard {
    pub fn new(admin: AdminClient) -> Self {
        Self {
            admin,
            tab: StatusTab::All,
            jobs: Vec::new(),
            error: None,
        }
    }

    pub fn tab(&self) -> StatusTab {
        self.tab
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn refresh(&mut self) -> Result<()> {
        let query = JobQuery {
            status: self.tab.status(),
            ..Default::default()
        };
        match self.admin.list_jobs(&query).await {
            Ok(jobs) => {
                self.jobs = jobs;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                warn!(tab = self.tab.label(), error = %e, "Failed to fetch jobs for moderation");
                self.error = Some(e.user_message("Failed to fetch jobs"));
                Err(e.into())
            }
        }
    }

    /// Switch tabs, refetching only when the tab actually changes.
    pub async fn select_tab(&mut self, tab: StatusTab) -> Result<bool> {
        if tab == self.tab {
            return Ok(false);
        }
        self.tab = tab;
        self.refresh().await?;
        Ok(true)
    }

    pub async fn approve(&mut self, job: &JobId) -> Result<()> {
        self.act(job, ModerationAction::Approve).await
    }

    pub async fn reject(&mut self, job: &JobId) -> Result<()> {
        self.act(job, ModerationAction::Reject).await
    }

    /// The list is refetched whether or not the action succeeded; there is
    /// no local patching to roll back.
    async fn act(&mut self, job: &JobId, action: ModerationAction) -> Result<()> {
        let outcome = self.admin.moderate_job(job, action).await;
        if let Err(e) = &outcome {
            warn!(job = %job, action = action.as_str(), error = %e, "Moderation failed");
        }
        let refreshed = self.refresh().await;
        outcome?;
        refreshed
    }
}
