//! Records exchanged with the marketplace backend.
//!
//! Field names follow the backend's JSON: rows come back in `snake_case`,
//! while request bodies use the mixed casing each endpoint expects.  All of
//! these are ephemeral view copies; the backend owns and validates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::de;
use crate::types::{
    CategoryId, ChatId, ExperienceLevel, JobId, JobStatus, JobType, MessageId, PortfolioItemId,
    ProductId, ProposalId, TransactionId, UserId, WorkEntryId,
};

// ---------------------------------------------------------------------------
// Jobs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Comma-separated skill list, as stored by the backend.
    #[serde(default)]
    pub skills_required: String,
    #[serde(deserialize_with = "de::amount")]
    pub budget: f64,
    pub status: JobStatus,
    #[serde(default)]
    pub client_id: Option<UserId>,
    #[serde(default)]
    pub client_email: Option<String>,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Job {
    pub fn skills(&self) -> Vec<String> {
        split_skills(&self.skills_required)
    }
}

/// Body of `POST /api/jobs`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub skills_required: String,
    pub budget: f64,
    #[serde(rename = "clientId")]
    pub client_id: UserId,
    pub category_id: CategoryId,
    pub location: String,
    #[serde(rename = "experienceLevel")]
    pub experience_level: ExperienceLevel,
    #[serde(rename = "jobType")]
    pub job_type: JobType,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Proposals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Proposal {
    pub id: ProposalId,
    #[serde(default)]
    pub job_id: Option<JobId>,
    pub freelancer_id: UserId,
    #[serde(default)]
    pub freelancer_email: Option<String>,
    #[serde(default)]
    pub proposal_content: String,
    #[serde(default)]
    pub timeline: Option<String>,
    #[serde(deserialize_with = "de::amount")]
    pub bid: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST /api/jobs/:id/proposals`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewProposal {
    /// Always sent as a string.
    #[serde(rename = "freelancerId")]
    pub freelancer_id: String,
    pub proposal_content: String,
    pub timeline: String,
    pub bid: f64,
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

/// A conversation scoped to one (job, client, freelancer) triple.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatThread {
    pub id: ChatId,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// A single chat message.  Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub sender_id: UserId,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST /api/chats/:id/messages`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewChatMessage {
    #[serde(rename = "senderId")]
    pub sender_id: UserId,
    pub content: String,
}

// ---------------------------------------------------------------------------
// Payments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ConnectsBalance {
    pub balance: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WalletBalance {
    #[serde(deserialize_with = "de::amount")]
    pub available_amount: f64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PackageDetails {
    /// Number of connects.
    pub amount: u32,
    /// Total price in dollars.
    pub price: f64,
}

/// Body of `POST /api/payments/connects/purchase`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConnectsPurchase {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    #[serde(rename = "packageDetails")]
    pub package_details: PackageDetails,
}

/// Body of `POST /api/balances/add`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AddFunds {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    pub amount: f64,
}

/// A ledger row.  `details` is an opaque JSON blob owned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(default)]
    pub id: Option<TransactionId>,
    pub transaction_type: String,
    #[serde(default)]
    pub details: serde_json::Value,
    #[serde(default)]
    pub transaction_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub job_id: Option<JobId>,
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default, deserialize_with = "de::skills")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "de::opt_amount")]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub is_public: Option<bool>,
}

/// Body of `POST /api/profiles`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewProfile {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    pub email: String,
    pub title: String,
    pub skills: Vec<String>,
    pub hourly_rate: f64,
    pub bio: String,
    pub profile_image: String,
    pub is_public: bool,
}

impl From<NewProfile> for Profile {
    fn from(p: NewProfile) -> Self {
        Self {
            user_id: Some(p.user_id),
            email: p.email,
            title: p.title,
            bio: p.bio,
            skills: p.skills,
            hourly_rate: Some(p.hourly_rate),
            profile_image: Some(p.profile_image),
            is_public: Some(p.is_public),
        }
    }
}

/// Body of `PUT /api/profiles/:userId`.  Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioItem {
    pub id: PortfolioItemId,
    pub project_title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// JSON-encoded list of links.
    #[serde(default)]
    pub media_links: Option<String>,
}

impl PortfolioItem {
    /// Decoded media links; malformed payloads yield an empty list.
    pub fn media_links(&self) -> Vec<String> {
        self.media_links
            .as_deref()
            .and_then(|raw| serde_json::from_str::<Vec<String>>(raw).ok())
            .unwrap_or_default()
    }
}

/// Body of the portfolio create/update calls.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PortfolioItemInput {
    #[serde(rename = "projectTitle")]
    pub project_title: String,
    pub description: String,
    /// JSON-encoded list of links.
    #[serde(rename = "mediaLinks")]
    pub media_links: String,
}

impl PortfolioItemInput {
    pub fn new(project_title: &str, description: &str, media_link: &str) -> Self {
        let links = vec![media_link.to_string()];
        Self {
            project_title: project_title.to_string(),
            description: description.to_string(),
            media_links: serde_json::to_string(&links).unwrap_or_else(|_| "[]".to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DigitalProduct {
    pub id: ProductId,
    pub product_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de::opt_amount")]
    pub price: Option<f64>,
    #[serde(default)]
    pub product_url: Option<String>,
}

/// Body of the digital-product create/update calls.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DigitalProductInput {
    #[serde(rename = "freelancerId")]
    pub freelancer_id: UserId,
    #[serde(rename = "productName")]
    pub product_name: String,
    pub description: String,
    #[serde(rename = "productUrl")]
    pub product_url: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkHistoryEntry {
    pub id: WorkEntryId,
    pub company_name: String,
    pub position: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_current: Option<bool>,
}

/// Body of the work-history create/update calls.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WorkHistoryInput {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    #[serde(rename = "companyName")]
    pub company_name: String,
    pub position: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
    pub description: String,
    #[serde(rename = "isCurrent")]
    pub is_current: bool,
}

/// Split a comma-separated skill list, dropping blanks.
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
