use clap::builder::PossibleValuesParser;
use clap::{Args, Subcommand};

use gigmarket_client::screens::apply::ApplyScreen;
use gigmarket_client::screens::job_proposals::JobProposals;
use gigmarket_client::AppState;
use gigmarket_shared::constants::TIMELINE_OPTIONS;
use gigmarket_shared::types::{JobId, ProposalId, Role};

use super::chat;
use crate::render;

#[derive(Subcommand)]
pub enum ProposalsAction {
    /// Submit a proposal as the signed-in freelancer
    Apply(ApplyArgs),
    /// Proposals received for one of your jobs
    List { job: String },
    /// Hire a freelancer and open the chat with them
    Hire {
        job: String,
        proposal: String,
        /// Print chat events as JSON lines
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
pub struct ApplyArgs {
    job: String,
    #[arg(long)]
    content: String,
    #[arg(long, value_parser = PossibleValuesParser::new(TIMELINE_OPTIONS.iter().copied()))]
    timeline: String,
    #[arg(long)]
    bid: String,
}

pub async fn run(state: &mut AppState, action: ProposalsAction) -> anyhow::Result<()> {
    match action {
        ProposalsAction::Apply(args) => apply(state, args).await,
        ProposalsAction::List { job } => {
            let screen = load(state, &job).await?;
            if let Some(job) = screen.job() {
                println!("{} (#{})", job.title, job.id);
            }
            if screen.proposals().is_empty() {
                println!("No proposals yet.");
            }
            for proposal in screen.proposals() {
                println!("{}", render::proposal_line(proposal));
                if !proposal.proposal_content.is_empty() {
                    println!("       {}", proposal.proposal_content);
                }
            }
            Ok(())
        }
        ProposalsAction::Hire {
            job,
            proposal,
            json,
        } => {
            let screen = load(state, &job).await?;
            let key = screen.hire(&ProposalId::from(proposal.as_str()))?;
            chat::converse(state, key, Role::Client, json).await
        }
    }
}

async fn load(state: &mut AppState, job: &str) -> anyhow::Result<JobProposals> {
    let client = state.user_id().await?;
    let mut screen = JobProposals::new(state.api().clone(), JobId::from(job));
    screen.set_client(client);
    screen
        .load()
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message("Error loading proposals")))?;
    Ok(screen)
}

async fn apply(state: &mut AppState, args: ApplyArgs) -> anyhow::Result<()> {
    let freelancer = state.user_id().await?;
    let mut screen = ApplyScreen::new(state.api().clone(), JobId::from(args.job.as_str()));
    screen.load_job().await?;
    if let Some(job) = screen.job() {
        render::job_details(job);
        println!();
    }

    if screen.set_freelancer(freelancer).await? {
        println!("You have already submitted a proposal for this job.");
        return Ok(());
    }

    let draft = screen.draft_mut();
    draft.content = args.content;
    draft.timeline = args.timeline;
    draft.bid = args.bid;

    let message = screen
        .submit()
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message("Failed to submit proposal")))?;
    println!("{message}");
    Ok(())
}
