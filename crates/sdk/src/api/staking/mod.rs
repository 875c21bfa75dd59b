use std::sync::Arc;

use serde::Serialize;

use crate::api::{
    http::HttpClient,
    types::{ApiResult, GenericResult},
};

/// Body shared by stake and unstake.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeRequest {
    pub address: String,
    pub amount: f64,
    pub private_key: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRewardsRequest {
    pub address: String,
    pub private_key: String,
}

#[derive(Debug, Clone)]
pub struct StakingApi {
    client: Arc<HttpClient>,
}

impl StakingApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn stake(&self, address: &str, amount: f64, private_key: &str) -> ApiResult<GenericResult> {
        let request = StakeRequest {
            address: address.to_string(),
            amount,
            private_key: private_key.to_string(),
        };
        self.client.post("/api/staking/stake", &request).await
    }

    pub async fn unstake(
        &self,
        address: &str,
        amount: f64,
        private_key: &str,
    ) -> ApiResult<GenericResult> {
        let request = StakeRequest {
            address: address.to_string(),
            amount,
            private_key: private_key.to_string(),
        };
        self.client.post("/api/staking/unstake", &request).await
    }

    pub async fn get_info(&self, address: &str) -> ApiResult<GenericResult> {
        self.client.get(&format!("/api/staking/info/{}", address)).await
    }

    pub async fn claim_rewards(&self, address: &str, private_key: &str) -> ApiResult<GenericResult> {
        let request =
            ClaimRewardsRequest { address: address.to_string(), private_key: private_key.to_string() };
        self.client.post("/api/staking/claim", &request).await
    }
}
