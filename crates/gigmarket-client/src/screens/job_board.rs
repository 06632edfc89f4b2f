//! Freelancer job search.

use std::collections::{BTreeSet, HashMap};

use futures::future::join_all;
use tracing::{debug, info, warn};

use gigmarket_api::{ApiClient, JobQuery};
use gigmarket_shared::models::{Category, Job};
use gigmarket_shared::types::{
    CategoryId, ExperienceLevel, JobId, JobStatus, JobType, ProposalBucket, UserId,
};

use crate::error::Result;

/// Everything the user can narrow the job list by.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilters {
    pub search: String,
    pub location: String,
    pub category: Option<CategoryId>,
    pub experience: BTreeSet<ExperienceLevel>,
    pub job_type: JobType,
    pub proposals: BTreeSet<ProposalBucket>,
}

impl JobFilters {
    /// `jobType` is always sent; every other filter only when set.
    pub fn to_query(&self) -> JobQuery {
        JobQuery {
            status: None,
            location: self.location.clone(),
            category_id: self.category.clone(),
            search: self.search.clone(),
            experience_levels: self.experience.clone(),
            job_type: Some(self.job_type),
            proposals: self.proposals.clone(),
        }
    }
}

pub struct JobBoard {
    api: ApiClient,
    filters: JobFilters,
    jobs: Vec<Job>,
    proposal_counts: HashMap<JobId, usize>,
    categories: Vec<Category>,
    connects: Option<i64>,
    error: Option<String>,
}

impl JobBoard {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            filters: JobFilters::default(),
            jobs: Vec::new(),
            proposal_counts: HashMap::new(),
            categories: Vec::new(),
            connects: None,
            error: None,
        }
    }

    pub fn filters(&self) -> &JobFilters {
        &self.filters
    }

    /// Approved jobs only; anything else the backend returns is hidden.
    pub fn visible_jobs(&self) -> impl Iterator<Item = &Job> {
        self.jobs.iter().filter(|j| j.status == JobStatus::Approved)
    }

    /// `None` until counted, or when the count could not be fetched.
    pub fn proposal_count(&self, job: &JobId) -> Option<usize> {
        self.proposal_counts.get(job).copied()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn connects(&self) -> Option<i64> {
        self.connects
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Categories are loaded once; failures leave the list empty.
    pub async fn load_categories(&mut self) {
        if !self.categories.is_empty() {
            return;
        }
        match self.api.categories().await {
            Ok(categories) => self.categories = categories,
            Err(e) => warn!(error = %e, "Failed to fetch categories"),
        }
    }

    pub async fn load_connects(&mut self, user: &UserId) {
        match self.api.connects_balance(user).await {
            Ok(b) => self.connects = Some(b.balance),
            Err(e) => warn!(user = %user, error = %e, "Failed to fetch connects balance"),
        }
    }

    /// Fetch the list for the current filters, then the proposal counts.
    /// On failure the previous list stays and [`JobBoard::error`] is set.
    pub async fn refresh(&mut self) -> Result<()> {
        self.error = None;
        let jobs = match self.api.list_jobs(&self.filters.to_query()).await {
            Ok(jobs) => jobs,
            Err(e) => {
                warn!(error = %e, "Failed to fetch jobs");
                self.error = Some("Failed to fetch jobs".to_string());
                return Err(e.into());
            }
        };
        debug!(count = jobs.len(), "Jobs fetched");
        self.jobs = jobs;
        self.count_proposals().await;
        Ok(())
    }

    async fn count_proposals(&mut self) {
        let ids: Vec<JobId> = self.visible_jobs().map(|j| j.id.clone()).collect();
        let api = &self.api;
        let counts = join_all(ids.into_iter().map(|id| async move {
            let count = api.proposals(&id).await;
            (id, count)
        }))
        .await;

        self.proposal_counts.clear();
        for (id, count) in counts {
            match count {
                Ok(proposals) => {
                    self.proposal_counts.insert(id, proposals.len());
                }
                Err(e) => debug!(job = %id, error = %e, "Proposal count unavailable"),
            }
        }
    }

    /// Apply `edit` to the filters and refetch once if anything actually
    /// changed.  Returns whether a refetch happened.
    pub async fn update_filters<F>(&mut self, edit: F) -> Result<bool>
    where
        F: FnOnce(&mut JobFilters),
    {
        let before = self.filters.clone();
        edit(&mut self.filters);
        if self.filters == before {
            return Ok(false);
        }
        info!(filters = ?self.filters, "Job filters changed");
        self.refresh().await?;
        Ok(true)
    }

    pub async fn set_search(&mut self, text: &str) -> Result<bool> {
        self.update_filters(|f| f.search = text.to_string()).await
    }

    pub async fn set_location(&mut self, text: &str) -> Result<bool> {
        self.update_filters(|f| f.location = text.to_string()).await
    }

    pub async fn set_category(&mut self, category: Option<CategoryId>) -> Result<bool> {
        self.update_filters(|f| f.category = category).await
    }

    pub async fn set_job_type(&mut self, job_type: JobType) -> Result<bool> {
        self.update_filters(|f| f.job_type = job_type).await
    }

    pub async fn toggle_experience(&mut self, level: ExperienceLevel) -> Result<bool> {
        self.update_filters(|f| toggle(&mut f.experience, level)).await
    }

    pub async fn toggle_proposals(&mut self, bucket: ProposalBucket) -> Result<bool> {
        self.update_filters(|f| toggle(&mut f.proposals, bucket)).await
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_send_job_type_only() {
        assert_eq!(
            JobFilters::default().to_query().to_pairs(),
            vec![("jobType", "Hourly".to_string())]
        );
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut set = BTreeSet::new();
        toggle(&mut set, ExperienceLevel::Expert);
        assert!(set.contains(&ExperienceLevel::Expert));
        toggle(&mut set, ExperienceLevel::Expert);
        assert!(set.is_empty());
    }
}
