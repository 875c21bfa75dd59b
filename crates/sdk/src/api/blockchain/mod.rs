use std::sync::Arc;

use crate::api::{
    http::HttpClient,
    types::{ApiResult, GenericResult, extract_list},
};

/// Path for a block lookup: all-digit identifiers are indexes, anything else is a hash.
pub fn block_path(identifier: &str) -> String {
    if !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit()) {
        format!("/api/blockchain/block-by-index/{}", identifier)
    } else {
        format!("/api/blockchain/block/{}", identifier)
    }
}

#[derive(Debug, Clone)]
pub struct BlockchainApi {
    client: Arc<HttpClient>,
}

impl BlockchainApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn get_info(&self) -> ApiResult<GenericResult> {
        self.client.get("/api/blockchain/info").await
    }

    /// Get a block by index or by hash
    ///
    /// # Arguments
    ///
    /// * `identifier` - A block index such as `"42"`, or a block hash
    pub async fn get_block(&self, identifier: &str) -> ApiResult<GenericResult> {
        self.client.get(&block_path(identifier)).await
    }

    /// Get the most recent blocks, newest first as ordered by the server
    pub async fn get_latest_blocks(&self, count: u32) -> ApiResult<Vec<GenericResult>> {
        let result = self.client.get_with_query("/api/blockchain/blocks", &[("limit", count)]).await?;
        extract_list(result, "blocks")
    }
}
