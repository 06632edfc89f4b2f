//! Connects, wallet funds and the transaction ledger.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use gigmarket_api::ApiClient;
use gigmarket_shared::constants::{CONNECT_PRICE_USD, CREDIT_TRANSACTION_TYPES};
use gigmarket_shared::models::{AddFunds, ConnectsPurchase, PackageDetails, Transaction};
use gigmarket_shared::types::{JobId, UserId};
use gigmarket_shared::validate;

use crate::error::{ClientError, Result};

/// `$x.yy`
pub fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Price a connects package at the fixed per-connect rate.
pub fn package_for(quantity: u32) -> PackageDetails {
    PackageDetails {
        amount: quantity,
        price: f64::from(quantity) * CONNECT_PRICE_USD,
    }
}

/// `+` for ledger entries that credit connects, `-` for the rest.
pub fn sign_for(transaction_type: &str) -> char {
    if CREDIT_TRANSACTION_TYPES.iter().any(|t| *t == transaction_type) {
        '+'
    } else {
        '-'
    }
}

pub fn friendly_label(transaction_type: &str) -> String {
    match transaction_type {
        "connect_purchase" => "Connects purchased",
        "monthly_renewal" => "Monthly renewal",
        "job_application" => "Applied to job",
        "job_cancelled" => "Job cancelled",
        other => other,
    }
    .to_string()
}

/// A ledger entry ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub date: Option<DateTime<Utc>>,
    pub label: String,
    pub sign: char,
    pub quantity: i64,
    pub job_id: Option<JobId>,
}

impl TransactionRow {
    pub fn from_transaction(tx: &Transaction) -> Self {
        Self {
            date: tx.transaction_date,
            label: friendly_label(&tx.transaction_type),
            sign: sign_for(&tx.transaction_type),
            quantity: details_amount(&tx.details).saturating_abs(),
            job_id: tx.job_id.clone(),
        }
    }

    /// e.g. `Mar 4, 2025`
    pub fn date_label(&self) -> String {
        self.date
            .map(|d| d.format("%b %-d, %Y").to_string())
            .unwrap_or_default()
    }
}

/// `details` is stored either as an object or as JSON text; the amount is
/// read from either, defaulting to zero.
fn details_amount(details: &serde_json::Value) -> i64 {
    let parsed;
    let object = match details {
        serde_json::Value::String(raw) => {
            parsed = serde_json::from_str::<serde_json::Value>(raw).unwrap_or_default();
            &parsed
        }
        other => other,
    };
    object
        .get("amount")
        .and_then(|a| a.as_i64().or_else(|| a.as_f64().map(|f| f as i64)))
        .unwrap_or(0)
}

/// Add funds to `user`'s wallet.  Returns the balance the backend reports.
pub(crate) async fn deposit(api: &ApiClient, user: &UserId, raw_amount: &str) -> Result<f64> {
    let amount = validate::positive_amount("Amount", raw_amount)?;
    let body = AddFunds {
        user_id: user.clone(),
        amount,
    };
    match api.add_funds(&body).await {
        Ok(balance) => Ok(balance.available_amount),
        Err(e) => {
            warn!(user = %user, error = %e, "Could not add funds");
            Err(e.into())
        }
    }
}

pub struct Wallet {
    api: ApiClient,
    user: Option<UserId>,
    connects: Option<i64>,
    balance: Option<f64>,
    history: Vec<TransactionRow>,
}

impl Wallet {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            user: None,
            connects: None,
            balance: None,
            history: Vec::new(),
        }
    }

    pub fn set_user(&mut self, user: UserId) {
        self.user = Some(user);
    }

    pub fn connects(&self) -> Option<i64> {
        self.connects
    }

    pub fn balance(&self) -> Option<f64> {
        self.balance
    }

    pub fn history(&self) -> &[TransactionRow] {
        &self.history
    }

    fn user(&self) -> Result<&UserId> {
        self.user.as_ref().ok_or(ClientError::NotReady("user id"))
    }

    /// Load connects, wallet balance and history together.  Each part
    /// fails independently and keeps its previous value.
    pub async fn load(&mut self) -> Result<()> {
        let user = self.user()?.clone();
        let (connects, balance, history) = tokio::join!(
            self.api.connects_balance(&user),
            self.api.wallet_balance(&user),
            self.api.transactions(&user),
        );

        match connects {
            Ok(c) => self.connects = Some(c.balance),
            Err(e) => warn!(user = %user, error = %e, "Failed to fetch connects"),
        }
        match balance {
            Ok(b) => self.balance = Some(b.available_amount),
            Err(e) => warn!(user = %user, error = %e, "Failed to fetch wallet balance"),
        }
        match history {
            Ok(rows) => self.history = rows.iter().map(TransactionRow::from_transaction).collect(),
            Err(e) => warn!(user = %user, error = %e, "Failed to fetch transactions"),
        }
        Ok(())
    }

    pub async fn refresh_history(&mut self) -> Result<()> {
        let rows = self.api.transactions(self.user()?).await?;
        self.history = rows.iter().map(TransactionRow::from_transaction).collect();
        Ok(())
    }

    /// Buy `raw_quantity` connects.  The displayed balance becomes whatever
    /// the backend reports, then the history is refreshed.
    pub async fn purchase_connects(&mut self, raw_quantity: &str) -> Result<i64> {
        let quantity = validate::connects_quantity(raw_quantity)?;
        let user = self.user()?.clone();
        let purchase = ConnectsPurchase {
            user_id: user.clone(),
            package_details: package_for(quantity),
        };

        let balance = match self.api.purchase_connects(&purchase).await {
            Ok(b) => b.balance,
            Err(e) => {
                warn!(user = %user, quantity, error = %e, "Purchase failed");
                return Err(e.into());
            }
        };
        self.connects = Some(balance);
        info!(user = %user, quantity, balance, "Connects balance updated");

        if let Err(e) = self.refresh_history().await {
            warn!(user = %user, error = %e, "Failed to refresh transactions");
        }
        Ok(balance)
    }

    pub async fn add_funds(&mut self, raw_amount: &str) -> Result<f64> {
        let user = self.user()?.clone();
        let balance = deposit(&self.api, &user, raw_amount).await?;
        self.balance = Some(balance);
        Ok(balance)
    }
}
