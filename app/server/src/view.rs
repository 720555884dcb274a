//! What the dashboard shows, derived from the view state.

use serde::Serialize;

use crate::address::is_admin;
use crate::controller::{FetchState, ViewState};
use crate::protocol::Transaction;

/// Rows shown in the "recent transactions" list. Export is not capped.
pub const RECENT_TX_LIMIT: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub address: String,
    pub admin_address: String,
    pub is_admin: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub balance: Option<BalanceView>,
    pub transactions: Vec<TransactionRow>,
    pub transaction_count: usize,
    pub last_fetched: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BalanceView {
    pub address: String,
    pub btc: String,
    pub sats: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionRow {
    pub txid: String,
    pub confirmations: &'static str,
    pub time: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(tx: &Transaction) -> Self {
        Self {
            txid: tx.txid.clone(),
            confirmations: tx.confirmation_label(),
            time: tx
                .block_time_utc()
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| "unconfirmed".to_string()),
        }
    }
}

impl DashboardView {
    pub fn render(state: &ViewState, admin_address: &str) -> Self {
        let mut view = Self {
            address: state.input().to_string(),
            admin_address: admin_address.to_string(),
            is_admin: is_admin(state.input(), admin_address),
            loading: false,
            error: None,
            balance: None,
            transactions: Vec::new(),
            transaction_count: 0,
            last_fetched: None,
        };

        match state.state() {
            FetchState::Idle => {}
            FetchState::Loading => view.loading = true,
            FetchState::Failure(e) => view.error = Some(e.to_string()),
            FetchState::Success(snapshot) => {
                view.balance = Some(BalanceView {
                    address: snapshot.address.clone(),
                    btc: snapshot.stats.balance_btc(),
                    sats: snapshot.stats.balance_sats(),
                });
                view.transactions = snapshot
                    .transactions
                    .iter()
                    .take(RECENT_TX_LIMIT)
                    .map(TransactionRow::from)
                    .collect();
                view.transaction_count = snapshot.transactions.len();
                view.last_fetched = Some(snapshot.fetched_at.to_rfc3339());
            }
        }

        view
    }
}
