use clap::{Args, Subcommand};

use gigmarket_client::screens::profile::{PortfolioDraft, ProductDraft, ProfileEditor, WorkDraft};
use gigmarket_client::{AppState, ClientError};
use gigmarket_shared::types::{PortfolioItemId, ProductId, WorkEntryId};

use crate::render;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Print the profile, creating it on first use
    Show,
    Bio { text: String },
    Title { text: String },
    /// Replace the skill list
    Skills { skills: Vec<String> },
    Rate { amount: String },
    /// Add or, with --id, update a portfolio item
    Portfolio(PortfolioArgs),
    /// Add or, with --id, update a digital product
    Product(ProductArgs),
    /// Add or, with --id, update a work history entry
    Work(WorkArgs),
    /// Delete a portfolio item, product or work entry
    Delete {
        #[arg(value_parser = ["portfolio", "product", "work"])]
        kind: String,
        id: String,
    },
    /// Delete the whole profile
    Remove {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args)]
pub struct PortfolioArgs {
    #[arg(long)]
    id: Option<String>,
    #[arg(long)]
    title: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long, default_value = "")]
    link: String,
}

#[derive(Args)]
pub struct ProductArgs {
    #[arg(long)]
    id: Option<String>,
    #[arg(long)]
    name: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long, default_value = "")]
    url: String,
    #[arg(long, default_value = "")]
    price: String,
}

#[derive(Args)]
pub struct WorkArgs {
    #[arg(long)]
    id: Option<String>,
    #[arg(long)]
    company: String,
    #[arg(long)]
    position: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long)]
    start: String,
    /// Leave out while the position is current
    #[arg(long, default_value = "")]
    end: String,
}

pub async fn run(state: &mut AppState, action: ProfileAction) -> anyhow::Result<()> {
    let user = state.user_id().await?;
    let email = state.email().unwrap_or_default().to_string();
    let mut editor = ProfileEditor::new(state.api().clone(), user, email);

    if let ProfileAction::Remove { yes } = action {
        if !yes {
            anyhow::bail!("pass --yes to delete your profile");
        }
        editor
            .delete_profile()
            .await
            .map_err(|e| anyhow::anyhow!(e.user_message("Failed to delete profile")))?;
        println!("Profile deleted.");
        return Ok(());
    }

    editor
        .load()
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message("Error fetching profile")))?;

    let saved: Result<(), ClientError> = match action {
        ProfileAction::Show => Ok(()),
        ProfileAction::Bio { text } => editor.save_bio(&text).await,
        ProfileAction::Title { text } => editor.save_title(&text).await,
        ProfileAction::Skills { skills } => editor.save_skills(skills).await,
        ProfileAction::Rate { amount } => editor.save_hourly_rate(&amount).await,
        ProfileAction::Portfolio(args) => {
            let draft = PortfolioDraft {
                title: args.title,
                description: args.description,
                media_link: args.link,
            };
            let id = args.id.map(PortfolioItemId::from);
            editor.save_portfolio_item(id.as_ref(), &draft).await
        }
        ProfileAction::Product(args) => {
            let draft = ProductDraft {
                name: args.name,
                description: args.description,
                url: args.url,
                price: args.price,
            };
            let id = args.id.map(ProductId::from);
            editor.save_product(id.as_ref(), &draft).await
        }
        ProfileAction::Work(args) => {
            let draft = WorkDraft {
                company: args.company,
                position: args.position,
                description: args.description,
                start_date: args.start,
                end_date: args.end,
            };
            let id = args.id.map(WorkEntryId::from);
            editor.save_work_entry(id.as_ref(), &draft).await
        }
        ProfileAction::Delete { kind, id } => match kind.as_str() {
            "portfolio" => editor.delete_portfolio_item(&PortfolioItemId::from(id)).await,
            "product" => editor.delete_product(&ProductId::from(id)).await,
            _ => editor.delete_work_entry(&WorkEntryId::from(id)).await,
        },
        ProfileAction::Remove { .. } => Ok(()),
    };
    saved.map_err(|e| anyhow::anyhow!(e.user_message("Failed to save profile")))?;

    render::profile(&editor);
    Ok(())
}
