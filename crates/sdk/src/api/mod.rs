mod blockchain;
mod contract;
mod explorer;
mod governance;
pub mod http;
mod mempool;
mod mining;
mod nft;
mod staking;
mod transaction;
mod types;
mod wallet;

use std::{collections::BTreeMap, sync::Arc};

use serde::{Deserialize, Serialize};

pub use blockchain::{BlockchainApi, block_path};
pub use contract::{CallContractRequest, ContractApi, DeployContractRequest};
pub use explorer::ExplorerApi;
pub use governance::{GovernanceApi, VoteRequest};
pub use mempool::MempoolApi;
pub use mining::{MiningApi, StartMiningRequest};
pub use nft::{NftApi, TransferNftRequest};
pub use staking::{ClaimRewardsRequest, StakeRequest, StakingApi};
pub use transaction::{SendTransactionRequest, TransactionApi};
pub use types::{
    API_KEY_ENV, API_URL_ENV, ApiResult, ApiSdkError, ClientConfig, DEFAULT_BASE_URL,
    DEFAULT_TIMEOUT, GenericResult, PagingContext, TIMEOUT_ENV, decode, extract_f64, extract_list,
    extract_object,
};
pub use wallet::{RegisterRequest, WalletApi};

use crate::api::http::HttpClient;

#[derive(Debug, Clone)]
pub struct HealthApi {
    client: Arc<HttpClient>,
}

impl HealthApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn check(&self) -> ApiResult<GenericResult> {
        self.client.get("/health").await
    }

    /// The API description served at `GET /api`.
    pub async fn version(&self) -> ApiResult<ApiVersion> {
        decode(self.client.get("/api").await?)
    }
}

/// Name and version the node reports for its REST API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiVersion {
    pub name: String,
    pub version: String,
    /// Route prefix per API area, e.g. `"wallets" => "/api/wallets"`.
    #[serde(default)]
    pub endpoints: BTreeMap<String, String>,
    #[serde(default)]
    pub documentation: Option<String>,
}
