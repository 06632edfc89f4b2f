//! Process-wide session state shared by every screen.
//!
//! [`AppState`] owns the configuration, the anonymous backend client and
//! the identity of the signed-in user.  Screens borrow the client from here
//! and ask it for the resolved user id.

use std::sync::Arc;

use gigmarket_api::{AdminClient, ApiClient, ClientConfig};
use gigmarket_shared::types::{Role, UserId};

use crate::chat::{ChatKey, ChatSession};
use crate::error::{ClientError, Result};
use crate::identity::IdentityResolver;

pub struct AppState {
    config: ClientConfig,
    api: Arc<ApiClient>,
    /// Email of the signed-in user, if any.
    email: Option<String>,
    identity: IdentityResolver<ApiClient>,
}

impl AppState {
    pub fn new(config: ClientConfig, email: Option<String>) -> Result<Self> {
        let api = Arc::new(ApiClient::new(&config)?);
        Ok(Self {
            identity: IdentityResolver::new(api.clone()),
            config,
            api,
            email,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// The moderation capability, available only when a token is configured.
    pub fn admin(&self) -> Result<AdminClient> {
        self.config
            .admin_token
            .as_deref()
            .map(|token| self.api.authenticated(token))
            .ok_or(ClientError::NotReady("admin token"))
    }

    /// Resolve the signed-in user's backend id.
    pub async fn user_id(&mut self) -> Result<UserId> {
        let email = self.email.as_deref().ok_or(ClientError::NotReady("email"))?;
        self.identity
            .resolve(email)
            .await
            .ok_or(ClientError::NotReady("user id"))
    }

    /// A chat session that shares this state's resolved identity.
    pub fn chat(&self, key: ChatKey, role: Role) -> ChatSession<ApiClient> {
        let identity = IdentityResolver::known(self.api.clone(), self.identity.user_id().cloned());
        ChatSession::new(self.api.clone(), key, role, self.config.poll_interval)
            .with_identity(identity)
    }
}
