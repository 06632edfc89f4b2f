//! Client job posting, with the wallet balance shown alongside.

use tracing::{info, warn};

use gigmarket_api::ApiClient;
use gigmarket_shared::constants::{DEFAULT_JOB_BUDGET, DEFAULT_JOB_LOCATION};
use gigmarket_shared::models::{Category, NewJob};
use gigmarket_shared::types::{CategoryId, ExperienceLevel, JobType, UserId};
use gigmarket_shared::{validate, ValidationError};

use crate::error::{ClientError, Result};
use crate::screens::wallet;

#[derive(Debug, Clone, PartialEq)]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    pub category: Option<CategoryId>,
    pub budget: String,
    pub experience_level: ExperienceLevel,
    pub job_type: JobType,
    skills: Vec<String>,
}

impl Default for JobDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: None,
            budget: DEFAULT_JOB_BUDGET.to_string(),
            experience_level: ExperienceLevel::Expert,
            job_type: JobType::Hourly,
            skills: Vec::new(),
        }
    }
}

impl JobDraft {
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Blank input is ignored.
    pub fn add_skill(&mut self, raw: &str) -> bool {
        let skill = raw.trim();
        if skill.is_empty() {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    pub fn remove_skill(&mut self, index: usize) -> Option<String> {
        (index < self.skills.len()).then(|| self.skills.remove(index))
    }

    /// Required fields, a positive budget and, when the wallet balance is
    /// known, a budget the wallet can cover.
    pub fn validate(
        &self,
        client_id: &UserId,
        balance: Option<f64>,
    ) -> std::result::Result<NewJob, ValidationError> {
        let title = validate::required("Title", &self.title)?;
        let description = validate::required("Description", &self.description)?;
        let category = self
            .category
            .clone()
            .filter(|c| !c.is_blank())
            .ok_or(ValidationError::EmptyField("Category"))?;
        if self.skills.is_empty() {
            return Err(ValidationError::NoSkills);
        }
        let budget = validate::positive_amount("Budget", &self.budget)?;
        validate::budget_within_balance(budget, balance)?;

        Ok(NewJob {
            title: title.to_string(),
            description: description.to_string(),
            skills_required: self.skills.join(", "),
            budget,
            client_id: client_id.clone(),
            category_id: category,
            location: DEFAULT_JOB_LOCATION.to_string(),
            experience_level: self.experience_level,
            job_type: self.job_type,
        })
    }
}

pub struct PostJobScreen {
    api: ApiClient,
    client_id: Option<UserId>,
    categories: Vec<Category>,
    balance: Option<f64>,
    draft: JobDraft,
}

impl PostJobScreen {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            client_id: None,
            categories: Vec::new(),
            balance: None,
            draft: JobDraft::default(),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn balance(&self) -> Option<f64> {
        self.balance
    }

    pub fn draft(&self) -> &JobDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut JobDraft {
        &mut self.draft
    }

    /// Load categories; the first one becomes the default selection.
    pub async fn load_categories(&mut self) {
        match self.api.categories().await {
            Ok(categories) => {
                if self.draft.category.is_none() {
                    self.draft.category = categories.first().map(|c| c.id.clone());
                }
                self.categories = categories;
            }
            Err(e) => warn!(error = %e, "Failed to fetch categories"),
        }
    }

    /// Record the client and fetch their wallet balance.  A failed balance
    /// fetch leaves it unknown, which skips the budget check.
    pub async fn set_client(&mut self, client_id: UserId) {
        match self.api.wallet_balance(&client_id).await {
            Ok(b) => self.balance = Some(b.available_amount),
            Err(e) => warn!(client = %client_id, error = %e, "Unable to fetch balance"),
        }
        self.client_id = Some(client_id);
    }

    pub async fn add_funds(&mut self, raw_amount: &str) -> Result<f64> {
        let client_id = self.client_id.as_ref().ok_or(ClientError::NotReady("client id"))?;
        let balance = wallet::deposit(&self.api, client_id, raw_amount).await?;
        self.balance = Some(balance);
        Ok(balance)
    }

    /// Validate and post the draft.  On success the form resets, keeping
    /// the selected category and levels.
    pub async fn submit(&mut self) -> Result<()> {
        let client_id = self.client_id.as_ref().ok_or(ClientError::NotReady("client id"))?;
        let job = self.draft.validate(client_id, self.balance)?;

        if let Err(e) = self.api.create_job(&job).await {
            warn!(client = %client_id, error = %e, "Failed to post job");
            return Err(e.into());
        }
        info!(title = %job.title, "Job draft submitted");

        self.draft.title.clear();
        self.draft.description.clear();
        self.draft.skills.clear();
        self.draft.budget = DEFAULT_JOB_BUDGET.to_string();
        Ok(())
    }
}
