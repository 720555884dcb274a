//! Configuration management
//!
//! Two strings, read once at startup: where the block explorer lives and
//! which address earns the cosmetic admin badge.

use std::env;

pub const DEFAULT_EXPLORER_BASE_URL: &str = "https://blockstream.info/api";
pub const DEFAULT_ADMIN_ADDRESS: &str = "bc1q2ld78maaw2qkc8usgqtcpvq2ua6x47lt3u0lsu";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub explorer_base_url: String,
    pub admin_address: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::new(get_explorer_base_url(), get_admin_address())
    }

    pub fn new(explorer_base_url: impl Into<String>, admin_address: impl Into<String>) -> Self {
        Self {
            explorer_base_url: explorer_base_url.into().trim_end_matches('/').to_string(),
            admin_address: admin_address.into().trim().to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_EXPLORER_BASE_URL, DEFAULT_ADMIN_ADDRESS)
    }
}

/// Get the block-explorer base URL
///
/// Any Esplora-compatible REST API works (blockstream.info, mempool.space,
/// a local electrs with HTTP enabled).
pub fn get_explorer_base_url() -> String {
    non_empty_var("EXPLORER_BASE_URL").unwrap_or_else(|| DEFAULT_EXPLORER_BASE_URL.to_string())
}

/// Get the address shown with the admin badge
pub fn get_admin_address() -> String {
    non_empty_var("ADMIN_ADDRESS").unwrap_or_else(|| DEFAULT_ADMIN_ADDRESS.to_string())
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
