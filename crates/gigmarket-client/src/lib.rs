//! # gigmarket-client
//!
//! Screen logic for the marketplace front end: the live chat session, the
//! job board and moderation lists, proposals, wallet and profile editing.
//! Everything talks to the backend through `gigmarket-api`; rendering is
//! left to the binary.

pub mod chat;
pub mod error;
pub mod events;
pub mod identity;
pub mod screens;
pub mod state;

pub use chat::{ChatKey, ChatPhase, ChatSession, MessageView};
pub use error::{ClientError, Result};
pub use events::{ClientEvent, EventSink};
pub use identity::{IdentityResolver, IdentityState};
pub use state::AppState;
