use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::api::{
    http::HttpClient,
    types::{ApiResult, GenericResult, PagingContext, extract_list},
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployContractRequest {
    pub code: String,
    pub owner: String,
    pub private_key: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallContractRequest {
    pub contract_address: String,
    pub method: String,
    pub params: Vec<Value>,
    pub caller: String,
    pub private_key: String,
}

#[derive(Debug, Clone)]
pub struct ContractApi {
    client: Arc<HttpClient>,
}

impl ContractApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn deploy(&self, request: &DeployContractRequest) -> ApiResult<GenericResult> {
        self.client.post("/api/contracts/deploy", request).await
    }

    /// Invoke a method on a deployed contract
    ///
    /// # Arguments
    ///
    /// * `request` - Target contract, method name, positional params and the caller's credentials
    pub async fn call(&self, request: &CallContractRequest) -> ApiResult<GenericResult> {
        self.client.post("/api/contracts/call", request).await
    }

    pub async fn get(&self, contract_address: &str) -> ApiResult<GenericResult> {
        self.client.get(&format!("/api/contracts/{}", contract_address)).await
    }

    pub async fn get_state(&self, contract_address: &str) -> ApiResult<GenericResult> {
        self.client.get(&format!("/api/contracts/{}/state", contract_address)).await
    }

    pub async fn list(&self, paging: &PagingContext) -> ApiResult<Vec<GenericResult>> {
        let result = self.client.get_with_query("/api/contracts", paging).await?;
        extract_list(result, "contracts")
    }
}
