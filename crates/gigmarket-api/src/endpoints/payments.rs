use reqwest::Method;
use serde::Deserialize;
use tracing::info;

use gigmarket_shared::models::{AddFunds, ConnectsBalance, ConnectsPurchase, Transaction, WalletBalance};
use gigmarket_shared::types::UserId;

use crate::client::ApiClient;
use crate::error::Result;

#[derive(Deserialize)]
struct PurchaseResponse {
    connects: ConnectsBalance,
}

#[derive(Deserialize)]
struct AddFundsResponse {
    balance: WalletBalance,
}

impl ApiClient {
    /// `GET /api/payments/connects?userId=`
    pub async fn connects_balance(&self, user: &UserId) -> Result<ConnectsBalance> {
        let req = self
            .request(Method::GET, "/api/payments/connects")
            .query(&[("userId", user.as_str())]);
        self.fetch(req).await
    }

    /// `POST /api/payments/connects/purchase`.  Returns the balance the
    /// ledger reports after the purchase.
    pub async fn purchase_connects(&self, purchase: &ConnectsPurchase) -> Result<ConnectsBalance> {
        let req = self
            .request(Method::POST, "/api/payments/connects/purchase")
            .json(purchase);
        let resp: PurchaseResponse = self.fetch(req).await?;
        info!(
            user = %purchase.user_id,
            amount = purchase.package_details.amount,
            balance = resp.connects.balance,
            "Connects purchased"
        );
        Ok(resp.connects)
    }

    /// `GET /api/balances?userId=`
    pub async fn wallet_balance(&self, user: &UserId) -> Result<WalletBalance> {
        let req = self
            .request(Method::GET, "/api/balances")
            .query(&[("userId", user.as_str())]);
        self.fetch(req).await
    }

    /// `POST /api/balances/add`
    pub async fn add_funds(&self, deposit: &AddFunds) -> Result<WalletBalance> {
        let req = self.request(Method::POST, "/api/balances/add").json(deposit);
        let resp: AddFundsResponse = self.fetch(req).await?;
        info!(user = %deposit.user_id, amount = deposit.amount, "Funds added");
        Ok(resp.balance)
    }

    /// `GET /api/payments/transactions?userId=`
    pub async fn transactions(&self, user: &UserId) -> Result<Vec<Transaction>> {
        let req = self
            .request(Method::GET, "/api/payments/transactions")
            .query(&[("userId", user.as_str())]);
        self.fetch(req).await
    }
}
