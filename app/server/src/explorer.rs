use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{FetchError, FetchOutcome};
use crate::protocol::{AddressInfo, ExplorerTx};

/// Read-only view of a block explorer.
///
/// `Ok(None)` means the explorer answered with a non-success status.
/// Transport failures and undecodable bodies are `Err`.
#[async_trait]
pub trait BlockExplorer: Send + Sync {
    async fn address_info(&self, address: &str) -> FetchOutcome<Option<AddressInfo>>;

    async fn address_txs(&self, address: &str) -> FetchOutcome<Option<Vec<ExplorerTx>>>;
}

/// Esplora-style REST explorer (blockstream.info, mempool.space, electrs-http).
#[derive(Clone)]
pub struct HttpExplorer {
    client: reqwest::Client,
    base_url: String,
}

impl HttpExplorer {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("novachain/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> FetchOutcome<Option<T>> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status: StatusCode = response.status();
        if !status.is_success() {
            warn!("Explorer returned {} for {}", status, url);
            return Ok(None);
        }

        let body = response.json::<T>().await.map_err(|e| {
            FetchError::Transport(format!("Invalid explorer response from {}: {}", url, e))
        })?;
        Ok(Some(body))
    }
}

#[async_trait]
impl BlockExplorer for HttpExplorer {
    async fn address_info(&self, address: &str) -> FetchOutcome<Option<AddressInfo>> {
        self.get_json(&format!("/address/{}", address)).await
    }

    async fn address_txs(&self, address: &str) -> FetchOutcome<Option<Vec<ExplorerTx>>> {
        self.get_json(&format!("/address/{}/txs", address)).await
    }
}
