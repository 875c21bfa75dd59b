use reqwest::{
    Client, Method, StatusCode,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::api::types::{
    ApiResult, ApiSdkError, ClientConfig, DEFAULT_TIMEOUT, GenericResult,
};

/// The request pipeline every endpoint goes through.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    base_config: ClientConfig,
}

impl HttpClient {
    pub fn new(mut base_config: ClientConfig) -> Self {
        if base_config.timeout.is_zero() {
            base_config.timeout = DEFAULT_TIMEOUT;
        }
        Self { client: Client::new(), base_config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.base_config
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_config.base_url.trim_end_matches('/'), endpoint)
    }

    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Sends one request and decodes the JSON object it returns.
    ///
    /// `path` is appended verbatim to the configured base URL.
    pub async fn request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<GenericResult>
    where
        B: Serialize + ?Sized,
    {
        self.execute::<B, ()>(method, path, None, body).await
    }

    pub async fn get(&self, endpoint: &str) -> ApiResult<GenericResult> {
        self.execute::<(), ()>(Method::GET, endpoint, None, None).await
    }

    pub async fn get_with_query<Q>(&self, endpoint: &str, query: &Q) -> ApiResult<GenericResult>
    where
        Q: Serialize + ?Sized,
    {
        self.execute::<(), Q>(Method::GET, endpoint, Some(query), None).await
    }

    pub async fn post<B>(&self, endpoint: &str, body: &B) -> ApiResult<GenericResult>
    where
        B: Serialize + ?Sized,
    {
        self.execute::<B, ()>(Method::POST, endpoint, None, Some(body)).await
    }

    pub async fn post_empty(&self, endpoint: &str) -> ApiResult<GenericResult> {
        self.execute::<(), ()>(Method::POST, endpoint, None, None).await
    }

    async fn execute<B, Q>(
        &self,
        method: Method,
        endpoint: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> ApiResult<GenericResult>
    where
        B: Serialize + ?Sized,
        Q: Serialize + ?Sized,
    {
        // Encode first so a bad payload never reaches the wire.
        let payload = body.map(serde_json::to_vec).transpose().map_err(ApiSdkError::Serialization)?;

        let url = self.build_url(endpoint);
        let mut request = self
            .client
            .request(method.clone(), &url)
            .headers(self.build_headers())
            .timeout(self.base_config.timeout);

        if let Some(token) = self.base_config.bearer_token() {
            request = request.bearer_auth(token);
        }
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(payload) = payload {
            request = request.body(payload);
        }

        debug!("{} {}", method, url);
        let response = request.send().await.map_err(ApiSdkError::Network)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(ApiSdkError::Read)?;
        debug!("{} {} -> {}", method, url, status);

        if status.as_u16() >= 400 {
            let message = error_message(&bytes);
            warn!("{} {} failed with {}: {}", method, url, status, message);
            return Err(ApiSdkError::Api { status_code: status.as_u16(), message });
        }

        decode_body(status, &bytes)
    }
}

/// Picks the server's `error` field when present, otherwise the raw body text.
pub(crate) fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<GenericResult>(body)
        .ok()
        .and_then(|envelope| match envelope.get("error") {
            Some(Value::String(message)) => Some(message.clone()),
            _ => None,
        })
        .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned())
}

fn decode_body(status: StatusCode, body: &[u8]) -> ApiResult<GenericResult> {
    serde_json::from_slice::<GenericResult>(body).map_err(|e| {
        debug!("undecodable {} response body: {}", status, e);
        ApiSdkError::Decode(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_error_message_prefers_error_field() {
        assert_eq!(error_message(br#"{"error":"not found"}"#), "not found");
    }

    #[test]
    fn test_error_message_falls_back_to_raw_body() {
        assert_eq!(error_message(b"Internal Server Error"), "Internal Server Error");
        assert_eq!(error_message(br#"{"error":404}"#), r#"{"error":404}"#);
        assert_eq!(error_message(br#"{"message":"nope"}"#), r#"{"message":"nope"}"#);
        assert_eq!(error_message(br#"["error"]"#), r#"["error"]"#);
        assert_eq!(error_message(b""), "");
    }

    #[test]
    fn test_decode_body_rejects_non_objects() {
        assert!(matches!(decode_body(StatusCode::OK, b"[1,2]"), Err(ApiSdkError::Decode(_))));
        assert!(matches!(decode_body(StatusCode::OK, b"\"ok\""), Err(ApiSdkError::Decode(_))));
        assert!(matches!(decode_body(StatusCode::OK, b""), Err(ApiSdkError::Decode(_))));

        let result = decode_body(StatusCode::OK, br#"{"status":"ok"}"#).unwrap();
        assert_eq!(result.get("status"), Some(&Value::String("ok".to_string())));
    }

    #[test]
    fn test_zero_timeout_uses_default() {
        let client = HttpClient::new(ClientConfig::local().with_timeout(Duration::ZERO));
        assert_eq!(client.config().timeout, DEFAULT_TIMEOUT);

        let client = HttpClient::new(ClientConfig::local().with_timeout(Duration::from_secs(5)));
        assert_eq!(client.config().timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_build_url_joins_base_and_path() {
        let client = HttpClient::new(ClientConfig::new("http://node:3000/"));
        assert_eq!(client.build_url("/health"), "http://node:3000/health");

        let client = HttpClient::new(ClientConfig::new("http://node:3000"));
        assert_eq!(
            client.build_url("/api/blockchain/blocks?limit=5"),
            "http://node:3000/api/blockchain/blocks?limit=5"
        );
    }
}
