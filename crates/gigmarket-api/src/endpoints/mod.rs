//! Endpoint groups.  Each module adds an `impl` block to [`crate::ApiClient`]
//! (or [`crate::AdminClient`] for moderation) covering one backend resource.

pub mod categories;
pub mod chats;
pub mod identity;
pub mod jobs;
pub mod moderation;
pub mod payments;
pub mod profiles;
pub mod proposals;
