//! # gigmarket-api
//!
//! REST transport for the marketplace backend.
//!
//! [`ApiClient`] is the anonymous capability used by every screen.  Admin
//! moderation calls exist only on [`AdminClient`], which is built from an
//! `ApiClient` plus a bearer token, so an unauthenticated caller cannot reach
//! them.  The [`backend`] traits describe the slices of the API that the chat
//! session depends on, which lets the poller run against an in-memory fake.

pub mod backend;
pub mod client;
pub mod config;
pub mod endpoints;

mod error;

pub use backend::{ChatApi, IdentityApi};
pub use client::{AdminClient, ApiClient};
pub use config::ClientConfig;
pub use endpoints::jobs::JobQuery;
pub use error::{ApiError, Result};
