//! Subcommand handlers.
//!
//! Each sub-module groups related commands by screen.  Handlers take the
//! shared [`AppState`](gigmarket_client::AppState), drive one screen and
//! print through [`crate::render`].

pub mod chat;
pub mod jobs;
pub mod moderation;
pub mod profile;
pub mod proposals;
pub mod wallet;

use clap::ValueEnum;

use gigmarket_shared::types::{ExperienceLevel, JobType, ProposalBucket, Role};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RoleArg {
    Client,
    Freelancer,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Client => Role::Client,
            RoleArg::Freelancer => Role::Freelancer,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LevelArg {
    Entry,
    Intermediate,
    Expert,
}

impl From<LevelArg> for ExperienceLevel {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Entry => ExperienceLevel::Entry,
            LevelArg::Intermediate => ExperienceLevel::Intermediate,
            LevelArg::Expert => ExperienceLevel::Expert,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum JobTypeArg {
    Hourly,
    Fixed,
}

impl From<JobTypeArg> for JobType {
    fn from(arg: JobTypeArg) -> Self {
        match arg {
            JobTypeArg::Hourly => JobType::Hourly,
            JobTypeArg::Fixed => JobType::Fixed,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum BucketArg {
    #[value(name = "lt5")]
    LessThan5,
    #[value(name = "5-10")]
    FiveToTen,
    #[value(name = "10-20")]
    TenToTwenty,
    #[value(name = "20-50")]
    TwentyToFifty,
    #[value(name = "50+")]
    FiftyPlus,
}

impl From<BucketArg> for ProposalBucket {
    fn from(arg: BucketArg) -> Self {
        match arg {
            BucketArg::LessThan5 => ProposalBucket::LessThan5,
            BucketArg::FiveToTen => ProposalBucket::FiveToTen,
            BucketArg::TenToTwenty => ProposalBucket::TenToTwenty,
            BucketArg::TwentyToFifty => ProposalBucket::TwentyToFifty,
            BucketArg::FiftyPlus => ProposalBucket::FiftyPlus,
        }
    }
}
