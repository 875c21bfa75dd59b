use std::sync::Arc;

use crate::api::{
    http::HttpClient,
    types::{ApiResult, GenericResult, extract_list},
};

#[derive(Debug, Clone)]
pub struct MempoolApi {
    client: Arc<HttpClient>,
}

impl MempoolApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn get_stats(&self) -> ApiResult<GenericResult> {
        self.client.get("/api/mempool/stats").await
    }

    pub async fn get_transactions(&self) -> ApiResult<Vec<GenericResult>> {
        let result = self.client.get("/api/mempool/transactions").await?;
        extract_list(result, "transactions")
    }
}
