use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::debug;

use gigmarket_shared::types::UserId;
use gigmarket_shared::validate;

use crate::client::ApiClient;
use crate::error::Result;

#[derive(Serialize)]
struct UserIdRequest<'a> {
    email: &'a str,
}

#[derive(Deserialize)]
struct UserIdResponse {
    #[serde(rename = "userId")]
    user_id: UserId,
}

impl ApiClient {
    /// `POST /api/getUserId`: map an email to the backend user id.
    pub async fn user_id_for_email(&self, email: &str) -> Result<UserId> {
        let email = validate::required("Email", email)?;
        let req = self
            .request(Method::POST, "/api/getUserId")
            .json(&UserIdRequest { email });
        let resp: UserIdResponse = self.fetch(req).await?;
        debug!(user_id = %resp.user_id, "Resolved user id");
        Ok(resp.user_id)
    }
}
