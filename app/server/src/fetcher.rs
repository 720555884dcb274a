//! Balance retrieval
//!
//! Turns a raw address string into a validated, fetched and reconciled
//! [`AddressSnapshot`]. Two sequential explorer calls: the balance first,
//! then the transaction list only once the address is known to exist.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::address::is_valid_address;
use crate::error::{FetchError, FetchOutcome};
use crate::explorer::BlockExplorer;
use crate::protocol::{AddressSnapshot, AddressStats, Transaction};

#[derive(Clone)]
pub struct BalanceFetcher {
    explorer: Arc<dyn BlockExplorer>,
}

impl BalanceFetcher {
    pub fn new(explorer: Arc<dyn BlockExplorer>) -> Self {
        Self { explorer }
    }

    /// Fetch balance and transactions for `address`.
    ///
    /// - invalid input fails with `InvalidAddress` before any request
    /// - a non-success balance response fails with `AddressNotFound` and
    ///   the transaction list is never requested
    /// - a non-success transaction response degrades to an empty list
    /// - transport or decoding errors on either call fail the whole fetch
    pub async fn fetch(&self, address: &str) -> FetchOutcome<AddressSnapshot> {
        let address = address.trim();
        if !is_valid_address(address) {
            return Err(FetchError::InvalidAddress);
        }

        info!("Fetching balance for {}", address);
        let info = self
            .explorer
            .address_info(address)
            .await?
            .ok_or(FetchError::AddressNotFound)?;
        let stats = AddressStats::from_chain_stats(&info.chain_stats)?;

        let transactions: Vec<Transaction> = match self.explorer.address_txs(address).await? {
            Some(txs) => txs.into_iter().map(Transaction::from).collect(),
            None => {
                warn!("Transaction list unavailable for {}; showing none", address);
                Vec::new()
            }
        };

        info!(
            "Fetched {}: balance={} sats txs={}",
            address,
            stats.balance_sats(),
            transactions.len()
        );

        Ok(AddressSnapshot {
            address: address.to_string(),
            stats,
            transactions,
            fetched_at: Utc::now(),
        })
    }
}
