//! Block-explorer wire format and the records the dashboard keeps.

use bitcoin::SignedAmount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::amount::format_btc;
use crate::error::{FetchError, FetchOutcome};

/// `GET /address/:addr`
#[derive(Debug, Deserialize)]
pub struct AddressInfo {
    pub chain_stats: ChainStats,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChainStats {
    #[serde(default)]
    pub funded_txo_sum: Option<u64>,
    #[serde(default)]
    pub spent_txo_sum: Option<u64>,
}

/// One element of `GET /address/:addr/txs`
#[derive(Debug, Deserialize)]
pub struct ExplorerTx {
    #[serde(default)]
    pub txid: String,
    #[serde(default)]
    pub status: TxStatus,
}

#[derive(Debug, Default, Deserialize)]
pub struct TxStatus {
    #[serde(default)]
    pub confirmed: bool,
    #[serde(default)]
    pub block_time: Option<u64>,
}

/// Body of `POST /address`: what the user typed.
#[derive(Debug, Serialize, Deserialize)]
pub struct AddressInput {
    pub address: String,
}

/// Funded, spent and the derived balance of one address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressStats {
    pub funded: SignedAmount,
    pub spent: SignedAmount,
}

impl AddressStats {
    /// Build stats from the explorer's `chain_stats`. Missing or zero sums
    /// count as zero.
    pub fn from_chain_stats(stats: &ChainStats) -> FetchOutcome<Self> {
        Ok(Self {
            funded: to_signed(stats.funded_txo_sum.unwrap_or(0))?,
            spent: to_signed(stats.spent_txo_sum.unwrap_or(0))?,
        })
    }

    /// `funded - spent`, not clamped: inconsistent upstream data shows up as
    /// a negative balance.
    pub fn balance(&self) -> SignedAmount {
        SignedAmount::from_sat(self.funded.to_sat() - self.spent.to_sat())
    }

    pub fn balance_sats(&self) -> i64 {
        self.balance().to_sat()
    }

    pub fn balance_btc(&self) -> String {
        format_btc(self.balance())
    }
}

fn to_signed(sats: u64) -> FetchOutcome<SignedAmount> {
    i64::try_from(sats)
        .map(SignedAmount::from_sat)
        .map_err(|_| FetchError::Transport(format!("satoshi amount out of range: {}", sats)))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub txid: String,
    pub confirmed: bool,
    /// Unix seconds; `None` while unconfirmed.
    pub block_time: Option<u64>,
}

impl From<ExplorerTx> for Transaction {
    fn from(tx: ExplorerTx) -> Self {
        Self {
            txid: tx.txid,
            confirmed: tx.status.confirmed,
            block_time: tx.status.block_time.filter(|t| *t != 0),
        }
    }
}

impl Transaction {
    pub fn confirmation_label(&self) -> &'static str {
        if self.confirmed {
            "Confirmed"
        } else {
            "Unconfirmed"
        }
    }

    pub fn block_time_utc(&self) -> Option<DateTime<Utc>> {
        self.block_time
            .and_then(|t| i64::try_from(t).ok())
            .and_then(|t| DateTime::from_timestamp(t, 0))
    }
}

/// Everything one successful fetch produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressSnapshot {
    pub address: String,
    pub stats: AddressStats,
    pub transactions: Vec<Transaction>,
    pub fetched_at: DateTime<Utc>,
}
