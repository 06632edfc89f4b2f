//! View-state controllers, one per screen.
//!
//! Each holds an [`ApiClient`](gigmarket_api::ApiClient) clone and the data
//! the screen shows.  Nothing here renders; the front end reads the state
//! back after each call.

pub mod apply;
pub mod job_board;
pub mod job_proposals;
pub mod moderation;
pub mod post_job;
pub mod posted_jobs;
pub mod profile;
pub mod wallet;
