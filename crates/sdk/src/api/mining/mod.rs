use std::sync::Arc;

use serde::Serialize;

use crate::api::{
    http::HttpClient,
    types::{ApiResult, GenericResult},
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartMiningRequest {
    pub miner_address: String,
}

#[derive(Debug, Clone)]
pub struct MiningApi {
    client: Arc<HttpClient>,
}

impl MiningApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn get_info(&self) -> ApiResult<GenericResult> {
        self.client.get("/api/mining/info").await
    }

    /// Ask the node to start mining, crediting rewards to `miner_address`
    pub async fn start(&self, miner_address: &str) -> ApiResult<GenericResult> {
        let request = StartMiningRequest { miner_address: miner_address.to_string() };
        self.client.post("/api/mining/start", &request).await
    }

    pub async fn stop(&self) -> ApiResult<GenericResult> {
        self.client.post_empty("/api/mining/stop").await
    }

    pub async fn get_stats(&self, address: &str) -> ApiResult<GenericResult> {
        self.client.get(&format!("/api/mining/stats/{}", address)).await
    }
}
