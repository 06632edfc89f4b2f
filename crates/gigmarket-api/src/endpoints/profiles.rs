//! Profile, portfolio, digital-product and work-history CRUD.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::info;

use gigmarket_shared::models::{
    DigitalProduct, DigitalProductInput, NewProfile, PortfolioItem, PortfolioItemInput, Profile,
    ProfileUpdate, WorkHistoryEntry, WorkHistoryInput,
};
use gigmarket_shared::types::{PortfolioItemId, ProductId, UserId, WorkEntryId};

use crate::client::ApiClient;
use crate::error::Result;

/// `GET /api/profiles/:userId` answers with the profile and its portfolio.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProfileBundle {
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default, rename = "portfolioItems")]
    pub portfolio_items: Vec<PortfolioItem>,
}

#[derive(Deserialize)]
struct ProfileEnvelope {
    profile: Profile,
}

#[derive(Deserialize)]
struct PortfolioEnvelope {
    #[serde(rename = "portfolioItem")]
    portfolio_item: PortfolioItem,
}

#[derive(Deserialize)]
struct ProductEnvelope {
    product: DigitalProduct,
}

/// Work-history writes answer with `{entry}` on some routes and the bare
/// row on others.
#[derive(Deserialize)]
#[serde(untagged)]
enum WorkEntryResponse {
    Wrapped { entry: WorkHistoryEntry },
    Bare(WorkHistoryEntry),
}

impl WorkEntryResponse {
    fn into_entry(self) -> WorkHistoryEntry {
        match self {
            WorkEntryResponse::Wrapped { entry } => entry,
            WorkEntryResponse::Bare(entry) => entry,
        }
    }
}

impl ApiClient {
    async fn fetch_envelope<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &impl serde::Serialize,
    ) -> Result<T> {
        self.fetch(self.request(method, path).json(body)).await
    }

    // -- profile ------------------------------------------------------------

    /// `GET /api/profiles/:userId`.  A missing profile surfaces as a 404
    /// [`crate::ApiError::Status`].
    pub async fn profile(&self, user: &UserId) -> Result<ProfileBundle> {
        let req = self.request(Method::GET, &format!("/api/profiles/{user}"));
        self.fetch(req).await
    }

    /// `POST /api/profiles`
    pub async fn create_profile(&self, profile: &NewProfile) -> Result<Profile> {
        let resp: ProfileEnvelope = self
            .fetch_envelope(Method::POST, "/api/profiles", profile)
            .await?;
        info!(user = %profile.user_id, "Profile created");
        Ok(resp.profile)
    }

    /// `PUT /api/profiles/:userId`
    pub async fn update_profile(&self, user: &UserId, update: &ProfileUpdate) -> Result<Profile> {
        let resp: ProfileEnvelope = self
            .fetch_envelope(Method::PUT, &format!("/api/profiles/{user}"), update)
            .await?;
        info!(user = %user, "Profile updated");
        Ok(resp.profile)
    }

    /// `DELETE /api/profiles/:userId`
    pub async fn delete_profile(&self, user: &UserId) -> Result<()> {
        let req = self.request(Method::DELETE, &format!("/api/profiles/{user}"));
        self.execute(req).await?;
        info!(user = %user, "Profile deleted");
        Ok(())
    }

    // -- portfolio ----------------------------------------------------------

    /// `POST /api/profiles/:userId/portfolio`
    pub async fn add_portfolio_item(
        &self,
        user: &UserId,
        item: &PortfolioItemInput,
    ) -> Result<PortfolioItem> {
        let resp: PortfolioEnvelope = self
            .fetch_envelope(Method::POST, &format!("/api/profiles/{user}/portfolio"), item)
            .await?;
        Ok(resp.portfolio_item)
    }

    /// `PUT /api/profiles/:userId/portfolio/:id`
    pub async fn update_portfolio_item(
        &self,
        user: &UserId,
        id: &PortfolioItemId,
        item: &PortfolioItemInput,
    ) -> Result<PortfolioItem> {
        let resp: PortfolioEnvelope = self
            .fetch_envelope(
                Method::PUT,
                &format!("/api/profiles/{user}/portfolio/{id}"),
                item,
            )
            .await?;
        Ok(resp.portfolio_item)
    }

    /// `DELETE /api/profiles/:userId/portfolio/:id`
    pub async fn delete_portfolio_item(&self, user: &UserId, id: &PortfolioItemId) -> Result<()> {
        let req = self.request(Method::DELETE, &format!("/api/profiles/{user}/portfolio/{id}"));
        self.execute(req).await
    }

    // -- digital products ---------------------------------------------------

    /// `GET /api/digital-products?userId=`
    pub async fn digital_products(&self, user: &UserId) -> Result<Vec<DigitalProduct>> {
        let req = self
            .request(Method::GET, "/api/digital-products")
            .query(&[("userId", user.as_str())]);
        self.fetch(req).await
    }

    /// `POST /api/digital-products`
    pub async fn create_digital_product(&self, product: &DigitalProductInput) -> Result<DigitalProduct> {
        let resp: ProductEnvelope = self
            .fetch_envelope(Method::POST, "/api/digital-products", product)
            .await?;
        Ok(resp.product)
    }

    /// `PUT /api/digital-products/:id`
    pub async fn update_digital_product(
        &self,
        id: &ProductId,
        product: &DigitalProductInput,
    ) -> Result<DigitalProduct> {
        let resp: ProductEnvelope = self
            .fetch_envelope(Method::PUT, &format!("/api/digital-products/{id}"), product)
            .await?;
        Ok(resp.product)
    }

    /// `DELETE /api/digital-products/:id`
    pub async fn delete_digital_product(&self, id: &ProductId) -> Result<()> {
        let req = self.request(Method::DELETE, &format!("/api/digital-products/{id}"));
        self.execute(req).await
    }

    // -- work history -------------------------------------------------------

    /// `GET /api/work-history/:userId`
    pub async fn work_history(&self, user: &UserId) -> Result<Vec<WorkHistoryEntry>> {
        let req = self.request(Method::GET, &format!("/api/work-history/{user}"));
        self.fetch(req).await
    }

    /// `POST /api/work-history`
    pub async fn create_work_entry(&self, entry: &WorkHistoryInput) -> Result<WorkHistoryEntry> {
        let resp: WorkEntryResponse = self
            .fetch_envelope(Method::POST, "/api/work-history", entry)
            .await?;
        Ok(resp.into_entry())
    }

    /// `PUT /api/work-history/:id`
    pub async fn update_work_entry(
        &self,
        id: &WorkEntryId,
        entry: &WorkHistoryInput,
    ) -> Result<WorkHistoryEntry> {
        let resp: WorkEntryResponse = self
            .fetch_envelope(Method::PUT, &format!("/api/work-history/{id}"), entry)
            .await?;
        Ok(resp.into_entry())
    }

    /// `DELETE /api/work-history/:id`
    pub async fn delete_work_entry(&self, id: &WorkEntryId) -> Result<()> {
        let req = self.request(Method::DELETE, &format!("/api/work-history/{id}"));
        self.execute(req).await
    }
}
