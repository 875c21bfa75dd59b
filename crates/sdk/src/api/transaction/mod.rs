use std::sync::Arc;

use serde::Serialize;

use crate::api::{
    http::HttpClient,
    types::{ApiResult, GenericResult, PagingContext, extract_list, extract_object},
};

/// Body of `POST /api/transactions/send`.
///
/// The private key is forwarded to the node as-is; nothing is signed locally.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTransactionRequest {
    pub from_address: String,
    pub to_address: String,
    pub amount: f64,
    pub private_key: String,
}

#[derive(Debug, Clone)]
pub struct TransactionApi {
    client: Arc<HttpClient>,
}

impl TransactionApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn get(&self, transaction_id: &str) -> ApiResult<GenericResult> {
        self.client.get(&format!("/api/transactions/{}", transaction_id)).await
    }

    pub async fn send(&self, transaction: &SendTransactionRequest) -> ApiResult<GenericResult> {
        self.client.post("/api/transactions/send", transaction).await
    }

    pub async fn get_history(
        &self,
        address: &str,
        paging: &PagingContext,
    ) -> ApiResult<Vec<GenericResult>> {
        let result = self
            .client
            .get_with_query(&format!("/api/transactions/history/{}", address), paging)
            .await?;
        extract_list(result, "transactions")
    }

    /// Transactions waiting in the node's mempool, as listed under `mempool.transactions`
    pub async fn get_pending(&self) -> ApiResult<Vec<GenericResult>> {
        let result = self.client.get("/api/transactions/pending").await?;
        extract_list(extract_object(result, "mempool")?, "transactions")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_send_request_uses_wire_names() {
        let request = SendTransactionRequest {
            from_address: "0xfrom".to_string(),
            to_address: "0xto".to_string(),
            amount: 2.5,
            private_key: "key".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "fromAddress": "0xfrom", "toAddress": "0xto", "amount": 2.5, "privateKey": "key" })
        );
    }
}
