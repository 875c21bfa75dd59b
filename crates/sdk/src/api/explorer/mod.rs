use std::sync::Arc;

use crate::api::{
    http::HttpClient,
    types::{ApiResult, GenericResult, extract_list},
};

#[derive(Debug, Clone)]
pub struct ExplorerApi {
    client: Arc<HttpClient>,
}

impl ExplorerApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn search_address(&self, address: &str) -> ApiResult<GenericResult> {
        self.client.get(&format!("/api/explorer/address/{}", address)).await
    }

    /// Largest balances on the chain, ranked by the node
    pub async fn get_rich_list(&self, limit: u32) -> ApiResult<Vec<GenericResult>> {
        let result = self.client.get_with_query("/api/explorer/richlist", &[("limit", limit)]).await?;
        extract_list(result, "richList")
    }

    pub async fn get_network_stats(&self) -> ApiResult<GenericResult> {
        self.client.get("/api/explorer/stats").await
    }
}
