//! # gigmarket
//!
//! Terminal front end for the freelance marketplace.
//!
//! Each subcommand drives one screen from `gigmarket-client`: the job board,
//! posting and applying, proposals and hiring, the wallet, the profile
//! editor, admin moderation and the live chat.

mod commands;
mod render;

use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gigmarket_api::ClientConfig;
use gigmarket_client::AppState;
use gigmarket_shared::constants::APP_NAME;

use crate::commands::{chat, jobs, moderation, profile, proposals, wallet};

#[derive(Parser)]
#[command(name = APP_NAME)]
#[command(about = "Freelance marketplace client", long_about = None)]
struct Cli {
    /// Backend root, e.g. http://localhost:5000
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Chat refresh period in milliseconds.
    #[arg(long, global = true)]
    poll_interval_ms: Option<u64>,

    /// Bearer token for moderation.
    #[arg(long, global = true, env = "GIGMARKET_ADMIN_TOKEN", hide_env_values = true)]
    admin_token: Option<String>,

    /// Email of the signed-in user.
    #[arg(long, global = true, env = "GIGMARKET_EMAIL")]
    email: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the signed-in user's id
    Whoami,
    /// Browse, post and review jobs
    Jobs {
        #[command(subcommand)]
        action: jobs::JobsAction,
    },
    /// Apply to a job, list proposals, hire
    Proposals {
        #[command(subcommand)]
        action: proposals::ProposalsAction,
    },
    /// Approve or reject posted jobs
    Moderate {
        #[command(subcommand)]
        action: moderation::ModerateAction,
    },
    /// Connects, funds and the transaction history
    Wallet {
        #[command(subcommand)]
        action: wallet::WalletAction,
    },
    /// Edit the freelancer profile
    Profile {
        #[command(subcommand)]
        action: profile::ProfileAction,
    },
    /// Open a live chat about a job
    Chat(chat::ChatArgs),
}

impl Cli {
    /// Environment first, then flags on top.
    fn config(&self) -> ClientConfig {
        let mut config = ClientConfig::from_env();
        if let Some(base) = &self.api_base {
            config = config.with_api_base(base);
        }
        if let Some(ms) = self.poll_interval_ms.filter(|ms| *ms > 0) {
            config.poll_interval = Duration::from_millis(ms);
        }
        if let Some(token) = self.admin_token.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            config.admin_token = Some(token.to_string());
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,gigmarket_client=info,gigmarket_api=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    tracing::debug!(?config, "Loaded configuration");

    let mut state = AppState::new(config, cli.email.clone()).context("building HTTP client")?;

    match cli.command {
        Commands::Whoami => {
            let id = state.user_id().await?;
            println!("{id}");
        }
        Commands::Jobs { action } => jobs::run(&mut state, action).await?,
        Commands::Proposals { action } => proposals::run(&mut state, action).await?,
        Commands::Moderate { action } => moderation::run(&state, action).await?,
        Commands::Wallet { action } => wallet::run(&mut state, action).await?,
        Commands::Profile { action } => profile::run(&mut state, action).await?,
        Commands::Chat(args) => chat::run(&mut state, args).await?,
    }

    Ok(())
}
