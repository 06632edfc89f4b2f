use reqwest::Method;

use gigmarket_shared::models::Category;

use crate::client::ApiClient;
use crate::error::Result;

impl ApiClient {
    /// `GET /api/categories/getAllCategories`
    pub async fn categories(&self) -> Result<Vec<Category>> {
        let req = self.request(Method::GET, "/api/categories/getAllCategories");
        self.fetch(req).await
    }
}
