use std::sync::Arc;

use serde::Serialize;

use crate::api::{
    http::HttpClient,
    types::{ApiResult, GenericResult, extract_list},
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferNftRequest {
    pub token_id: u64,
    pub from: String,
    pub to: String,
    pub private_key: String,
}

#[derive(Debug, Clone)]
pub struct NftApi {
    client: Arc<HttpClient>,
}

impl NftApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Mint a token. The metadata payload is passed through untouched.
    pub async fn mint<T>(&self, data: &T) -> ApiResult<GenericResult>
    where
        T: Serialize + ?Sized,
    {
        self.client.post("/api/nft/mint", data).await
    }

    pub async fn get(&self, token_id: u64) -> ApiResult<GenericResult> {
        self.client.get(&format!("/api/nft/{}", token_id)).await
    }

    pub async fn transfer(&self, request: &TransferNftRequest) -> ApiResult<GenericResult> {
        self.client.post("/api/nft/transfer", request).await
    }

    pub async fn list(&self, owner: &str) -> ApiResult<Vec<GenericResult>> {
        let result = self.client.get(&format!("/api/nft/list/{}", owner)).await?;
        extract_list(result, "nfts")
    }
}
