use std::sync::Arc;

use serde::Serialize;

use crate::api::{
    http::HttpClient,
    types::{ApiResult, GenericResult, extract_list},
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub proposal_id: u64,
    pub vote: bool,
    pub voter: String,
    pub private_key: String,
}

#[derive(Debug, Clone)]
pub struct GovernanceApi {
    client: Arc<HttpClient>,
}

impl GovernanceApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn create_proposal<T>(&self, data: &T) -> ApiResult<GenericResult>
    where
        T: Serialize + ?Sized,
    {
        self.client.post("/api/governance/proposal", data).await
    }

    pub async fn get_proposal(&self, proposal_id: u64) -> ApiResult<GenericResult> {
        self.client.get(&format!("/api/governance/proposal/{}", proposal_id)).await
    }

    pub async fn vote(&self, request: &VoteRequest) -> ApiResult<GenericResult> {
        self.client.post("/api/governance/vote", request).await
    }

    /// List proposals, optionally only those in `status` (e.g. `"active"`)
    pub async fn list_proposals(&self, status: Option<&str>) -> ApiResult<Vec<GenericResult>> {
        let result = match status {
            Some(status) => {
                self.client.get_with_query("/api/governance/proposals", &[("status", status)]).await?
            }
            None => self.client.get("/api/governance/proposals").await?,
        };
        extract_list(result, "proposals")
    }
}
