use clap::Subcommand;

use gigmarket_client::screens::wallet::{money, package_for, Wallet};
use gigmarket_client::AppState;
use gigmarket_shared::constants::DEFAULT_CONNECTS_QUANTITY;

use crate::render;

#[derive(Subcommand)]
pub enum WalletAction {
    /// Connects, funds and recent transactions
    Show,
    /// Buy connects at the fixed per-connect price
    Buy {
        #[arg(default_value_t = DEFAULT_CONNECTS_QUANTITY.to_string())]
        quantity: String,
    },
    /// Add funds to the wallet
    AddFunds { amount: String },
}

pub async fn run(state: &mut AppState, action: WalletAction) -> anyhow::Result<()> {
    let user = state.user_id().await?;
    let mut wallet = Wallet::new(state.api().clone());
    wallet.set_user(user);

    match action {
        WalletAction::Show => {
            wallet.load().await?;
            let connects = wallet
                .connects()
                .map_or_else(|| "unavailable".to_string(), |c| c.to_string());
            let funds = wallet.balance().map_or_else(|| "unavailable".to_string(), money);
            println!("Connects: {connects}");
            println!("Funds:    {funds}");
            println!();
            if wallet.history().is_empty() {
                println!("No transactions yet.");
            }
            for row in wallet.history() {
                println!("{}", render::transaction_line(row));
            }
        }
        WalletAction::Buy { quantity } => {
            let balance = wallet
                .purchase_connects(&quantity)
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message("Purchase failed")))?;
            if let Ok(n) = quantity.trim().parse::<u32>() {
                println!("Bought {n} connects for {}.", money(package_for(n).price));
            }
            println!("Connects balance: {balance}");
        }
        WalletAction::AddFunds { amount } => {
            let balance = wallet
                .add_funds(&amount)
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message("Could not add funds")))?;
            println!("Funds: {}", money(balance));
        }
    }
    Ok(())
}
