use clap::{Subcommand, ValueEnum};

use gigmarket_client::screens::moderation::{ModerationBoard, StatusTab};
use gigmarket_client::AppState;
use gigmarket_shared::types::JobId;

use crate::render;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TabArg {
    All,
    Approved,
    Pending,
    Rejected,
}

impl From<TabArg> for StatusTab {
    fn from(arg: TabArg) -> Self {
        match arg {
            TabArg::All => StatusTab::All,
            TabArg::Approved => StatusTab::Approved,
            TabArg::Pending => StatusTab::Pending,
            TabArg::Rejected => StatusTab::Rejected,
        }
    }
}

#[derive(Subcommand)]
pub enum ModerateAction {
    /// List jobs by moderation status
    List {
        #[arg(long, value_enum, default_value = "pending")]
        status: TabArg,
    },
    /// Approve a job, then list the tab again
    Approve {
        job: String,
        #[arg(long, value_enum, default_value = "pending")]
        status: TabArg,
    },
    /// Reject a job, then list the tab again
    Reject {
        job: String,
        #[arg(long, value_enum, default_value = "pending")]
        status: TabArg,
    },
}

pub async fn run(state: &AppState, action: ModerateAction) -> anyhow::Result<()> {
    let mut board = ModerationBoard::new(state.admin()?);

    let outcome = match action {
        ModerateAction::List { status } => {
            open_tab(&mut board, status.into()).await?;
            Ok(())
        }
        ModerateAction::Approve { job, status } => {
            board.select_tab(status.into()).await.ok();
            board.approve(&JobId::from(job.as_str())).await
        }
        ModerateAction::Reject { job, status } => {
            board.select_tab(status.into()).await.ok();
            board.reject(&JobId::from(job.as_str())).await
        }
    };

    print_tab(&board);
    outcome.map_err(|e| anyhow::anyhow!(e.user_message("Moderation action failed")))
}

async fn open_tab(board: &mut ModerationBoard, tab: StatusTab) -> anyhow::Result<()> {
    // All is the initial tab, so selecting it would not fetch.
    if !board.select_tab(tab).await? {
        board.refresh().await?;
    }
    Ok(())
}

fn print_tab(board: &ModerationBoard) {
    println!("[{}]", board.tab().label());
    if let Some(error) = board.error() {
        println!("{error}");
        return;
    }
    if board.jobs().is_empty() {
        println!("Nothing here.");
    }
    for job in board.jobs() {
        println!("{}", render::job_line(job, None));
    }
}
