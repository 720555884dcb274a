//! NovaChain Server Library
//!
//! Read-only Bitcoin address dashboard: balance and recent transactions
//! from an Esplora-style block explorer, with CSV export and a QR share view.

pub mod address;
pub mod amount;
pub mod config;
pub mod controller;
pub mod error;
pub mod explorer;
pub mod export;
pub mod fetcher;
pub mod protocol;
pub mod qr;
pub mod routes;
pub mod view;

pub use controller::{Dashboard, FetchState, ViewState};
pub use error::FetchError;
pub use explorer::{BlockExplorer, HttpExplorer};
pub use fetcher::BalanceFetcher;
