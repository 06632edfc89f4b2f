use std::collections::BTreeSet;

use reqwest::Method;
use tracing::{debug, info};

use gigmarket_shared::models::{Job, NewJob};
use gigmarket_shared::types::{CategoryId, ExperienceLevel, JobId, JobStatus, JobType, ProposalBucket};

use crate::client::ApiClient;
use crate::error::Result;

/// Filters accepted by `GET /api/jobs`.  Empty fields are left off the
/// query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobQuery {
    pub status: Option<JobStatus>,
    pub location: String,
    pub category_id: Option<CategoryId>,
    pub search: String,
    pub experience_levels: BTreeSet<ExperienceLevel>,
    pub job_type: Option<JobType>,
    pub proposals: BTreeSet<ProposalBucket>,
}

impl JobQuery {
    pub fn with_status(status: JobStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if !self.location.trim().is_empty() {
            pairs.push(("location", self.location.trim().to_string()));
        }
        if let Some(ref category) = self.category_id {
            if !category.is_blank() {
                pairs.push(("category_id", category.to_string()));
            }
        }
        if !self.search.trim().is_empty() {
            pairs.push(("search", self.search.trim().to_string()));
        }
        if !self.experience_levels.is_empty() {
            let joined = self
                .experience_levels
                .iter()
                .map(ExperienceLevel::label)
                .collect::<Vec<_>>()
                .join(",");
            pairs.push(("experienceLevel", joined));
        }
        if let Some(job_type) = self.job_type {
            pairs.push(("jobType", job_type.label().to_string()));
        }
        if !self.proposals.is_empty() {
            let joined = self
                .proposals
                .iter()
                .map(ProposalBucket::query_value)
                .collect::<Vec<_>>()
                .join(",");
            pairs.push(("proposals", joined));
        }

        pairs
    }
}

impl ApiClient {
    /// `GET /api/jobs[?…]`
    pub async fn list_jobs(&self, query: &JobQuery) -> Result<Vec<Job>> {
        let pairs = query.to_pairs();
        debug!(?pairs, "Fetching jobs");
        let req = self.request(Method::GET, "/api/jobs").query(&pairs);
        self.fetch(req).await
    }

    /// `GET /api/jobs/:id`
    pub async fn job(&self, id: &JobId) -> Result<Job> {
        let req = self.request(Method::GET, &format!("/api/jobs/{id}"));
        self.fetch(req).await
    }

    /// `POST /api/jobs`
    pub async fn create_job(&self, job: &NewJob) -> Result<()> {
        let req = self.request(Method::POST, "/api/jobs").json(job);
        self.execute(req).await?;
        info!(title = %job.title, client = %job.client_id, "Job posted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_has_no_pairs() {
        assert!(JobQuery::default().to_pairs().is_empty());
    }

    #[test]
    fn test_full_query_order_and_joining() {
        let query = JobQuery {
            status: None,
            location: "Lahore".into(),
            category_id: Some(CategoryId::from(4)),
            search: " rust ".into(),
            experience_levels: [ExperienceLevel::Expert, ExperienceLevel::Entry]
                .into_iter()
                .collect(),
            job_type: Some(JobType::Fixed),
            proposals: [ProposalBucket::FiftyPlus, ProposalBucket::LessThan5]
                .into_iter()
                .collect(),
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("location", "Lahore".to_string()),
                ("category_id", "4".to_string()),
                ("search", "rust".to_string()),
                ("experienceLevel", "Entry Level,Expert".to_string()),
                ("jobType", "Fixed".to_string()),
                ("proposals", "less_than_5,50_plus".to_string()),
            ]
        );
    }

    #[test]
    fn test_status_query() {
        assert_eq!(
            JobQuery::with_status(JobStatus::Pending).to_pairs(),
            vec![("status", "pending".to_string())]
        );
    }
}
