use std::sync::Arc;

use serde::Serialize;

use crate::api::{
    http::HttpClient,
    types::{ApiResult, GenericResult, extract_f64, extract_list},
};

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct WalletApi {
    client: Arc<HttpClient>,
}

impl WalletApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Registers an account on the node, which creates its wallet
    pub async fn create(&self, username: &str, password: &str) -> ApiResult<GenericResult> {
        let request =
            RegisterRequest { username: username.to_string(), password: password.to_string() };
        self.client.post("/api/auth/register", &request).await
    }

    pub async fn get_balance(&self, address: &str) -> ApiResult<f64> {
        let result = self.client.get(&format!("/api/wallets/balance/{}", address)).await?;
        extract_f64(&result, "balance")
    }

    pub async fn get_info(&self, address: &str) -> ApiResult<GenericResult> {
        self.client.get(&format!("/api/wallets/{}", address)).await
    }

    pub async fn get_utxos(&self, address: &str) -> ApiResult<Vec<GenericResult>> {
        let result = self.client.get(&format!("/api/wallets/utxos/{}", address)).await?;
        extract_list(result, "utxos")
    }
}
