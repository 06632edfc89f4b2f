//! Email → backend user id resolution.
//!
//! Every screen that needs the backend's user id goes through an
//! [`IdentityResolver`].  The id is cached for the resolver's lifetime only;
//! a failure leaves it [`IdentityState::Unavailable`] and dependents keep
//! waiting until `resolve` is called again.

use std::sync::Arc;

use tracing::{debug, info, warn};

use gigmarket_api::IdentityApi;
use gigmarket_shared::types::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityState {
    Pending,
    Resolved(UserId),
    /// Resolution failed; holds the message to show.
    Unavailable(String),
}

pub struct IdentityResolver<B: ?Sized> {
    backend: Arc<B>,
    state: IdentityState,
}

impl<B: IdentityApi + ?Sized> IdentityResolver<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            state: IdentityState::Pending,
        }
    }

    /// A resolver seeded with an id resolved elsewhere, if there is one.
    pub fn known(backend: Arc<B>, user: Option<UserId>) -> Self {
        Self {
            backend,
            state: user.map_or(IdentityState::Pending, IdentityState::Resolved),
        }
    }

    pub fn state(&self) -> &IdentityState {
        &self.state
    }

    pub fn user_id(&self) -> Option<&UserId> {
        match &self.state {
            IdentityState::Resolved(id) => Some(id),
            _ => None,
        }
    }

    /// Resolve `email`, reusing a previously resolved id.
    pub async fn resolve(&mut self, email: &str) -> Option<UserId> {
        if let IdentityState::Resolved(id) = &self.state {
            debug!(user = %id, "Using cached user id");
            return Some(id.clone());
        }

        match self.backend.user_id_for_email(email).await {
            Ok(id) => {
                info!(user = %id, "Resolved user id");
                self.state = IdentityState::Resolved(id.clone());
                Some(id)
            }
            Err(e) => {
                warn!(error = %e, "Failed to resolve user id");
                self.state = IdentityState::Unavailable(e.user_message("Unable to load your account"));
                None
            }
        }
    }
}
