use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Backend ids arrive as JSON numbers from some endpoints and as strings from
/// others (query parameters, route segments).  Both forms are accepted.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Signed(i64),
    Unsigned(u64),
    Text(String),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Signed(n) => n.to_string(),
            RawId::Unsigned(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

macro_rules! backend_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Blank ids are treated as absent.
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<u64> for $name {
            fn from(n: u64) -> Self {
                Self(n.to_string())
            }
        }

        // Canonical integers go back out as numbers, everything else as text.
        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self.0.parse::<u64>() {
                    Ok(n) if n.to_string() == self.0 => serializer.serialize_u64(n),
                    _ => serializer.serialize_str(&self.0),
                }
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                RawId::deserialize(deserializer).map(|raw| Self(raw.into_string()))
            }
        }
    };
}

backend_id!(
    /// Backend-internal user id, resolved from an email address.
    UserId
);
backend_id!(JobId);
backend_id!(ChatId);
backend_id!(MessageId);
backend_id!(CategoryId);
backend_id!(ProposalId);
backend_id!(PortfolioItemId);
backend_id!(ProductId);
backend_id!(WorkEntryId);
backend_id!(TransactionId);

/// Which side of a conversation the local user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Freelancer,
}

/// Moderation state of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Approved,
    Pending,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Approved => "approved",
            JobStatus::Pending => "pending",
            JobStatus::Rejected => "rejected",
            JobStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "Entry Level")]
    Entry,
    #[serde(rename = "Intermediate")]
    Intermediate,
    #[serde(rename = "Expert")]
    Expert,
}

impl ExperienceLevel {
    /// Label used by the backend for filtering and storage.
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "Entry Level",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum JobType {
    #[default]
    Hourly,
    Fixed,
}

impl JobType {
    pub fn label(&self) -> &'static str {
        match self {
            JobType::Hourly => "Hourly",
            JobType::Fixed => "Fixed",
        }
    }
}

/// Proposal-count ranges offered as job-board filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProposalBucket {
    LessThan5,
    FiveToTen,
    TenToTwenty,
    TwentyToFifty,
    FiftyPlus,
}

impl ProposalBucket {
    pub fn query_value(&self) -> &'static str {
        match self {
            ProposalBucket::LessThan5 => "less_than_5",
            ProposalBucket::FiveToTen => "5_to_10",
            ProposalBucket::TenToTwenty => "10_to_20",
            ProposalBucket::TwentyToFifty => "20_to_50",
            ProposalBucket::FiftyPlus => "50_plus",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_accepts_number_and_string() {
        let a: UserId = serde_json::from_str("42").unwrap();
        let b: UserId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "42");
    }

    #[test]
    fn test_numeric_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&JobId::from(12)).unwrap(), "12");
        assert_eq!(
            serde_json::to_string(&JobId::new("user_2abc")).unwrap(),
            "\"user_2abc\""
        );
        // Leading zeros would be lost as a number.
        assert_eq!(serde_json::to_string(&JobId::new("007")).unwrap(), "\"007\"");
    }

    #[test]
    fn test_blank_id() {
        assert!(UserId::new("  ").is_blank());
        assert!(!UserId::new("3").is_blank());
    }

    #[test]
    fn test_unknown_status_does_not_fail() {
        let s: JobStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(s, JobStatus::Unknown);
        let s: JobStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(s, JobStatus::Pending);
    }

    #[test]
    fn test_experience_level_labels() {
        assert_eq!(
            serde_json::to_string(&ExperienceLevel::Entry).unwrap(),
            "\"Entry Level\""
        );
        assert_eq!(ExperienceLevel::Expert.label(), "Expert");
    }
}
