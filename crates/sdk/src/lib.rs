//! Typed client for the STRAT blockchain REST API.
//!
//! Every call goes through one request pipeline ([`http::HttpClient`]) that adds
//! the JSON and bearer-auth headers, applies the configured timeout and turns the
//! response into either a [`GenericResult`] or an [`ApiSdkError`].
//!
//! ```no_run
//! use strat_sdk::{ClientConfig, StratClient};
//!
//! # async fn run() -> strat_sdk::ApiResult<()> {
//! let client = StratClient::new(ClientConfig::new("https://node.example").with_api_key("key"));
//! let block = client.blockchain.get_block("42").await?;
//! let balance = client.wallet.get_balance("0x1234567890abcdef1234567890abcdef12345678").await?;
//! # Ok(())
//! # }
//! ```
mod api;
pub mod utils;

pub use api::{
    API_KEY_ENV, API_URL_ENV, ApiResult, ApiSdkError, ApiVersion, BlockchainApi,
    CallContractRequest, ClaimRewardsRequest, ClientConfig, ContractApi, DEFAULT_BASE_URL,
    DEFAULT_TIMEOUT, DeployContractRequest, ExplorerApi, GenericResult, GovernanceApi, HealthApi,
    MempoolApi, MiningApi, NftApi, PagingContext, RegisterRequest, SendTransactionRequest,
    StakeRequest, StakingApi, StartMiningRequest, TIMEOUT_ENV, TransactionApi, TransferNftRequest,
    VoteRequest, WalletApi, block_path, decode, extract_f64, extract_list, extract_object, http,
};
pub use reqwest::Method;
pub use utils::{WEI_PER_UNIT, from_wei, is_valid_address, to_wei};

use std::sync::Arc;

use crate::api::http::HttpClient;
use futures::future::join_all;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// One entry of a [`StratClient::batch`] call.
#[derive(Debug, Clone)]
pub struct BatchRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl BatchRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::GET, path: path.into(), body: None }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self { method: Method::POST, path: path.into(), body: Some(body) }
    }
}

/// One connection to a STRAT node, grouped by API area.
///
/// Safe to share between tasks; all groups use the same connection pool.
#[derive(Debug, Clone)]
pub struct StratClient {
    client: Arc<HttpClient>,
    pub blockchain: BlockchainApi,
    pub transaction: TransactionApi,
    pub wallet: WalletApi,
    pub contract: ContractApi,
    pub mining: MiningApi,
    pub staking: StakingApi,
    pub nft: NftApi,
    pub governance: GovernanceApi,
    pub mempool: MempoolApi,
    pub explorer: ExplorerApi,
    pub health: HealthApi,
}

impl StratClient {
    pub fn new(config: ClientConfig) -> Self {
        let client = Arc::new(HttpClient::new(config));

        Self {
            blockchain: BlockchainApi::new(Arc::clone(&client)),
            transaction: TransactionApi::new(Arc::clone(&client)),
            wallet: WalletApi::new(Arc::clone(&client)),
            contract: ContractApi::new(Arc::clone(&client)),
            mining: MiningApi::new(Arc::clone(&client)),
            staking: StakingApi::new(Arc::clone(&client)),
            nft: NftApi::new(Arc::clone(&client)),
            governance: GovernanceApi::new(Arc::clone(&client)),
            mempool: MempoolApi::new(Arc::clone(&client)),
            explorer: ExplorerApi::new(Arc::clone(&client)),
            health: HealthApi::new(Arc::clone(&client)),
            client,
        }
    }

    /// Client for a node on `http://localhost:3000` without an API key
    pub fn local() -> Self {
        Self::new(ClientConfig::local())
    }

    pub fn config(&self) -> &ClientConfig {
        self.client.config()
    }

    /// Send a request to a path the typed groups don't cover.
    pub async fn request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<GenericResult>
    where
        B: Serialize + ?Sized,
    {
        self.client.request(method, path, body).await
    }

    /// Runs every request concurrently and waits for all of them.
    ///
    /// Results come back in request order; one failure does not cancel the others.
    pub async fn batch(&self, requests: &[BatchRequest]) -> Vec<ApiResult<GenericResult>> {
        debug!("sending batch of {} requests", requests.len());
        join_all(requests.iter().map(|request| {
            self.client.request(request.method.clone(), &request.path, request.body.as_ref())
        }))
        .await
    }

    pub async fn health_check(&self) -> ApiResult<GenericResult> {
        self.health.check().await
    }
}

impl Default for StratClient {
    fn default() -> Self {
        Self::local()
    }
}
