//! Saved-blocks store client implementation.
//!
//! Fetches the full collection of saved reusable blocks from a remote store
//! over HTTP.

use crate::catalog::types::BlockType;
use crate::store::models::SavedBlock;
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

/// HTTP client for the saved-blocks store.
///
/// One fetch-all request is issued per menu session; the session keeps
/// rendering with an empty saved list until the response arrives.
#[derive(Debug, Clone)]
pub struct ReusableStore {
    /// HTTP client for store requests
    client: Client,
    /// Base URL of the store API
    base_url: String,
}

impl ReusableStore {
    /// Create a new store client.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the store API (e.g. "https://example.com/wp-json/wp/v2")
    ///
    /// # Returns
    /// * `Result<ReusableStore>` - New client or error
    pub fn new(base_url: &str) -> Result<Self> {
        if base_url.trim().is_empty() {
            return Err(anyhow::anyhow!(
                "Saved-blocks store URL is required. Please set it in config.jsonc"
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch every saved reusable block from the store.
    ///
    /// # Returns
    /// * `Result<Vec<BlockType>>` - Saved blocks converted to block types, or error
    ///
    /// # Details
    /// Issues a single GET against the blocks collection. A failed fetch is
    /// reported as an error; the caller leaves the saved list empty in that
    /// case rather than surfacing a broken tab.
    pub async fn fetch_all(&self) -> Result<Vec<BlockType>> {
        let url = format!("{}/blocks", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch saved blocks from store")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "Saved-blocks store error ({}): {}",
                status,
                error_text
            ));
        }

        let records: Vec<SavedBlock> = response
            .json()
            .await
            .context("Failed to parse saved blocks response")?;

        Ok(records.into_iter().map(BlockType::from).collect())
    }
}
