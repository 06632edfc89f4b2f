//! # gigmarket-shared
//!
//! Types shared by every layer of the gigmarket client: backend id
//! newtypes, the records exchanged with the REST backend, constants, and the
//! client-side validation rules checked before any request is issued.

pub mod constants;
pub mod error;
pub mod models;
pub mod types;
pub mod validate;

mod de;

pub use error::ValidationError;
