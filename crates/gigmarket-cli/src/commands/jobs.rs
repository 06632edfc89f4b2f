use anyhow::Context;
use clap::{Args, Subcommand};

use gigmarket_client::screens::job_board::JobBoard;
use gigmarket_client::screens::post_job::PostJobScreen;
use gigmarket_client::screens::posted_jobs::PostedJobs;
use gigmarket_client::AppState;
use gigmarket_shared::types::{CategoryId, JobId};

use super::{BucketArg, JobTypeArg, LevelArg};
use crate::render;

#[derive(Subcommand)]
pub enum JobsAction {
    /// List approved jobs
    List(ListArgs),
    /// Show one job
    Show { id: String },
    /// Post a new job as the signed-in client
    Post(PostArgs),
    /// Jobs posted by the signed-in client
    Posted,
    /// List job categories
    Categories,
}

#[derive(Args)]
pub struct ListArgs {
    #[arg(long, default_value = "")]
    search: String,
    #[arg(long, default_value = "")]
    location: String,
    #[arg(long)]
    category: Option<String>,
    /// Repeat to select several levels
    #[arg(long = "level", value_enum)]
    levels: Vec<LevelArg>,
    #[arg(long = "type", value_enum, default_value = "hourly")]
    job_type: JobTypeArg,
    /// Repeat to select several ranges
    #[arg(long = "proposals", value_enum)]
    buckets: Vec<BucketArg>,
}

#[derive(Args)]
pub struct PostArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: String,
    /// Category id; defaults to the first category
    #[arg(long)]
    category: Option<String>,
    #[arg(long, default_value = "200")]
    budget: String,
    #[arg(long, value_enum, default_value = "expert")]
    level: LevelArg,
    #[arg(long = "type", value_enum, default_value = "hourly")]
    job_type: JobTypeArg,
    /// Repeat for each skill
    #[arg(long = "skill", required = true)]
    skills: Vec<String>,
}

pub async fn run(state: &mut AppState, action: JobsAction) -> anyhow::Result<()> {
    match action {
        JobsAction::List(args) => list(state, args).await,
        JobsAction::Show { id } => {
            let job = state
                .api()
                .job(&JobId::from(id.as_str()))
                .await
                .with_context(|| format!("loading job {id}"))?;
            render::job_details(&job);
            Ok(())
        }
        JobsAction::Post(args) => post(state, args).await,
        JobsAction::Posted => {
            let client = state.user_id().await?;
            let mut posted = PostedJobs::new(state.api().clone());
            posted.set_client(client);
            posted.refresh().await?;
            if posted.jobs().is_empty() {
                println!("No jobs posted yet.");
            }
            for job in posted.jobs() {
                println!("{}", render::job_line(job, None));
            }
            Ok(())
        }
        JobsAction::Categories => {
            for category in state.api().categories().await? {
                println!("{:>4}  {}", category.id.as_str(), category.name);
            }
            Ok(())
        }
    }
}

async fn list(state: &mut AppState, args: ListArgs) -> anyhow::Result<()> {
    let mut board = JobBoard::new(state.api().clone());
    // Filters are set up front so only one fetch is made.
    let fetched = board
        .update_filters(|f| {
            f.search = args.search;
            f.location = args.location;
            f.category = args.category.as_deref().map(CategoryId::from);
            f.experience = args.levels.into_iter().map(Into::into).collect();
            f.job_type = args.job_type.into();
            f.proposals = args.buckets.into_iter().map(Into::into).collect();
        })
        .await;
    let fetched = match fetched {
        Ok(true) => Ok(()),
        // defaults unchanged, nothing was requested yet
        Ok(false) => board.refresh().await,
        Err(e) => Err(e),
    };
    fetched.map_err(|e| anyhow::anyhow!(e.user_message("Failed to fetch jobs")))?;

    if let Ok(user) = state.user_id().await {
        board.load_connects(&user).await;
    }
    if let Some(connects) = board.connects() {
        println!("Connects available: {connects}");
    }

    let mut shown = 0;
    for job in board.visible_jobs() {
        println!("{}", render::job_line(job, board.proposal_count(&job.id)));
        shown += 1;
    }
    if shown == 0 {
        println!("No jobs match these filters.");
    }
    Ok(())
}

async fn post(state: &mut AppState, args: PostArgs) -> anyhow::Result<()> {
    let client = state.user_id().await?;
    let mut screen = PostJobScreen::new(state.api().clone());
    screen.load_categories().await;
    screen.set_client(client).await;

    let draft = screen.draft_mut();
    draft.title = args.title;
    draft.description = args.description;
    if let Some(category) = args.category {
        draft.category = Some(CategoryId::from(category));
    }
    draft.budget = args.budget;
    draft.experience_level = args.level.into();
    draft.job_type = args.job_type.into();
    for skill in &args.skills {
        draft.add_skill(skill);
    }

    screen
        .submit()
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message("Failed to post job")))?;
    println!("Job posted. It will be visible once approved.");
    Ok(())
}
