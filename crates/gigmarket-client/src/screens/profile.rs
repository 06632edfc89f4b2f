//! Freelancer profile editor: the profile itself plus portfolio, digital
//! products and work history.
//!
//! Local lists are patched with whatever record the backend returns, so a
//! successful save never needs a full reload.

use tracing::{debug, info, warn};

use gigmarket_api::ApiClient;
use gigmarket_shared::constants::DEFAULT_PROFILE_IMAGE;
use gigmarket_shared::models::{
    DigitalProduct, DigitalProductInput, NewProfile, PortfolioItem, PortfolioItemInput, Profile,
    ProfileUpdate, WorkHistoryEntry, WorkHistoryInput,
};
use gigmarket_shared::types::{PortfolioItemId, ProductId, UserId, WorkEntryId};
use gigmarket_shared::{validate, ValidationError};

use crate::error::Result;

type Validated<T> = std::result::Result<T, ValidationError>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioDraft {
    pub title: String,
    pub description: String,
    pub media_link: String,
}

impl PortfolioDraft {
    pub fn from_item(item: &PortfolioItem) -> Self {
        Self {
            title: item.project_title.clone(),
            description: item.description.clone().unwrap_or_default(),
            media_link: item.media_links().into_iter().next().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Validated<PortfolioItemInput> {
        let title = validate::required("Project title", &self.title)?;
        Ok(PortfolioItemInput::new(title, &self.description, &self.media_link))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub url: String,
    pub price: String,
}

impl ProductDraft {
    pub fn validate(&self, freelancer: &UserId) -> Validated<DigitalProductInput> {
        let name = validate::required("Product name", &self.name)?;
        let price = validate::non_negative_amount("Price", &self.price)?;
        Ok(DigitalProductInput {
            freelancer_id: freelancer.clone(),
            product_name: name.to_string(),
            description: self.description.clone(),
            product_url: self.url.trim().to_string(),
            price,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkDraft {
    pub company: String,
    pub position: String,
    pub description: String,
    pub start_date: String,
    /// Empty while the position is current.
    pub end_date: String,
}

impl WorkDraft {
    pub fn validate(&self, user: &UserId) -> Validated<WorkHistoryInput> {
        let company = validate::required("Company", &self.company)?;
        let position = validate::required("Position", &self.position)?;
        let start = validate::required("Start date", &self.start_date)?;
        let end = Some(self.end_date.trim())
            .filter(|d| !d.is_empty())
            .map(String::from);

        Ok(WorkHistoryInput {
            user_id: user.clone(),
            company_name: company.to_string(),
            position: position.to_string(),
            start_date: start.to_string(),
            is_current: end.is_none(),
            end_date: end,
            description: self.description.clone(),
        })
    }
}

/// Body used when a user opens the editor for the first time.
pub fn default_profile(user_id: &UserId, email: &str) -> NewProfile {
    NewProfile {
        user_id: user_id.clone(),
        email: email.to_string(),
        title: String::new(),
        skills: Vec::new(),
        hourly_rate: 0.0,
        bio: String::new(),
        profile_image: DEFAULT_PROFILE_IMAGE.to_string(),
        is_public: true,
    }
}

pub struct ProfileEditor {
    api: ApiClient,
    user_id: UserId,
    email: String,
    profile: Option<Profile>,
    portfolio: Vec<PortfolioItem>,
    products: Vec<DigitalProduct>,
    work_history: Vec<WorkHistoryEntry>,
}

impl ProfileEditor {
    pub fn new(api: ApiClient, user_id: UserId, email: impl Into<String>) -> Self {
        Self {
            api,
            user_id,
            email: email.into(),
            profile: None,
            portfolio: Vec::new(),
            products: Vec::new(),
            work_history: Vec::new(),
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn portfolio(&self) -> &[PortfolioItem] {
        &self.portfolio
    }

    pub fn products(&self) -> &[DigitalProduct] {
        &self.products
    }

    pub fn work_history(&self) -> &[WorkHistoryEntry] {
        &self.work_history
    }

    /// Profile first (creating it if missing), then products and work
    /// history.  The secondary lists fail independently.
    pub async fn load(&mut self) -> Result<()> {
        self.fetch_or_create().await?;

        let (products, work) = tokio::join!(
            self.api.digital_products(&self.user_id),
            self.api.work_history(&self.user_id),
        );
        match products {
            Ok(p) => self.products = p,
            Err(e) => warn!(user = %self.user_id, error = %e, "Failed to fetch products"),
        }
        match work {
            Ok(w) => self.work_history = w,
            Err(e) => warn!(user = %self.user_id, error = %e, "Failed to fetch work history"),
        }
        Ok(())
    }

    /// A 404 creates the profile with defaults.
    pub async fn fetch_or_create(&mut self) -> Result<()> {
        match self.api.profile(&self.user_id).await {
            Ok(bundle) => {
                debug!(user = %self.user_id, items = bundle.portfolio_items.len(), "Profile loaded");
                self.profile = Some(bundle.profile.unwrap_or_else(|| {
                    Profile::from(default_profile(&self.user_id, &self.email))
                }));
                self.portfolio = bundle.portfolio_items;
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                let created = self
                    .api
                    .create_profile(&default_profile(&self.user_id, &self.email))
                    .await
                    .map_err(|e| {
                        warn!(user = %self.user_id, error = %e, "Failed to create profile");
                        e
                    })?;
                self.profile = Some(created);
                self.portfolio.clear();
                Ok(())
            }
            Err(e) => {
                warn!(user = %self.user_id, error = %e, "Error fetching profile");
                Err(e.into())
            }
        }
    }

    /// Apply a partial update.  Empty updates send nothing.
    pub async fn update(&mut self, update: ProfileUpdate) -> Result<()> {
        if update.is_empty() {
            return Ok(());
        }
        if self.profile.is_none() {
            self.fetch_or_create().await?;
        }
        let profile = self.api.update_profile(&self.user_id, &update).await?;
        self.profile = Some(profile);
        Ok(())
    }

    /// Remove the whole profile and forget everything loaded for it.
    pub async fn delete_profile(&mut self) -> Result<()> {
        self.api.delete_profile(&self.user_id).await?;
        self.profile = None;
        self.portfolio.clear();
        self.products.clear();
        self.work_history.clear();
        Ok(())
    }

    pub async fn save_bio(&mut self, bio: &str) -> Result<()> {
        self.update(ProfileUpdate {
            bio: Some(bio.to_string()),
            ..Default::default()
        })
        .await
    }

    pub async fn save_title(&mut self, title: &str) -> Result<()> {
        self.update(ProfileUpdate {
            title: Some(title.trim().to_string()),
            ..Default::default()
        })
        .await
    }

    pub async fn save_skills(&mut self, skills: Vec<String>) -> Result<()> {
        let skills = skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        self.update(ProfileUpdate {
            skills: Some(skills),
            ..Default::default()
        })
        .await
    }

    pub async fn save_hourly_rate(&mut self, raw: &str) -> Result<()> {
        let rate = validate::non_negative_amount("Hourly rate", raw)?;
        self.update(ProfileUpdate {
            hourly_rate: Some(rate),
            ..Default::default()
        })
        .await
    }

    // -- portfolio ----------------------------------------------------------

    /// Create, or update `editing` when given.
    pub async fn save_portfolio_item(
        &mut self,
        editing: Option<&PortfolioItemId>,
        draft: &PortfolioDraft,
    ) -> Result<()> {
        let input = draft.validate()?;
        match editing {
            Some(id) => {
                let item = self.api.update_portfolio_item(&self.user_id, id, &input).await?;
                replace_by(&mut self.portfolio, |p| &p.id == id, item);
            }
            None => {
                let item = self.api.add_portfolio_item(&self.user_id, &input).await?;
                self.portfolio.push(item);
            }
        }
        info!(user = %self.user_id, "Portfolio saved");
        Ok(())
    }

    pub async fn delete_portfolio_item(&mut self, id: &PortfolioItemId) -> Result<()> {
        self.api.delete_portfolio_item(&self.user_id, id).await?;
        self.portfolio.retain(|p| &p.id != id);
        Ok(())
    }

    // -- digital products ---------------------------------------------------

    pub async fn save_product(&mut self, editing: Option<&ProductId>, draft: &ProductDraft) -> Result<()> {
        let input = draft.validate(&self.user_id)?;
        match editing {
            Some(id) => {
                let product = self.api.update_digital_product(id, &input).await?;
                replace_by(&mut self.products, |p| &p.id == id, product);
            }
            None => {
                let product = self.api.create_digital_product(&input).await?;
                self.products.push(product);
            }
        }
        Ok(())
    }

    pub async fn delete_product(&mut self, id: &ProductId) -> Result<()> {
        self.api.delete_digital_product(id).await?;
        self.products.retain(|p| &p.id != id);
        Ok(())
    }

    // -- work history -------------------------------------------------------

    pub async fn save_work_entry(&mut self, editing: Option<&WorkEntryId>, draft: &WorkDraft) -> Result<()> {
        let input = draft.validate(&self.user_id)?;
        match editing {
            Some(id) => {
                let entry = self.api.update_work_entry(id, &input).await?;
                replace_by(&mut self.work_history, |w| &w.id == id, entry);
            }
            None => {
                let entry = self.api.create_work_entry(&input).await?;
                self.work_history.push(entry);
            }
        }
        Ok(())
    }

    pub async fn delete_work_entry(&mut self, id: &WorkEntryId) -> Result<()> {
        self.api.delete_work_entry(id).await?;
        self.work_history.retain(|w| &w.id != id);
        Ok(())
    }
}

/// Swap in `fresh` for the first element matching `is_target`.
fn replace_by<T>(items: &mut [T], is_target: impl Fn(&T) -> bool, fresh: T) {
    if let Some(slot) = items.iter_mut().find(|item| is_target(item)) {
        *slot = fresh;
    }
}
