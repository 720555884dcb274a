//! Error types for the NovaChain dashboard

use thiserror::Error;

/// Why a single connect/fetch attempt failed.
///
/// Every variant is scoped to one attempt; the dashboard stays usable for
/// the next one. The `Display` text is what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Enter a Bitcoin address to connect")]
    MissingAddress,

    #[error("Invalid Bech32 address (must start with bc1...)")]
    InvalidAddress,

    #[error("Address not found")]
    AddressNotFound,

    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(e.to_string())
    }
}

pub type FetchOutcome<T> = Result<T, FetchError>;
