use std::{env, time::Duration};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const API_URL_ENV: &str = "STRAT_API_URL";
pub const API_KEY_ENV: &str = "STRAT_API_KEY";
pub const TIMEOUT_ENV: &str = "STRAT_TIMEOUT_SECS";

/// The untyped JSON object every successful call decodes into.
pub type GenericResult = Map<String, Value>;

/// Connection settings for a [`crate::StratClient`].
///
/// Immutable once handed to a client; each client owns its own copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), api_key: None, timeout: DEFAULT_TIMEOUT }
    }

    /// A node running on this machine with no authentication.
    pub fn local() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds a config from `STRAT_API_URL`, `STRAT_API_KEY` and `STRAT_TIMEOUT_SECS`.
    ///
    /// Unset variables keep their [`ClientConfig::local`] value.
    pub fn from_env() -> ApiResult<Self> {
        let mut config = Self::local();

        if let Ok(base_url) = env::var(API_URL_ENV) {
            if !base_url.trim().is_empty() {
                config.base_url = base_url;
            }
        }

        if let Ok(api_key) = env::var(API_KEY_ENV) {
            if !api_key.is_empty() {
                config.api_key = Some(api_key);
            }
        }

        if let Ok(timeout) = env::var(TIMEOUT_ENV) {
            let seconds = timeout.trim().parse::<u64>().map_err(|e| {
                ApiSdkError::Config(format!("{} must be a whole number of seconds: {}", TIMEOUT_ENV, e))
            })?;
            config.timeout = Duration::from_secs(seconds);
        }

        Ok(config)
    }

    /// The API key to send, treating an empty key as no key at all.
    pub fn bearer_token(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::local()
    }
}

#[derive(Error, Debug)]
pub enum ApiSdkError {
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Failed to read response: {0}")]
    Read(#[source] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("API error ({status_code}): {message}")]
    Api { status_code: u16, message: String },

    #[error("Unexpected response format: {0}")]
    UnexpectedFormat(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ApiSdkError {
    /// The HTTP status the server answered with, for server-reported failures.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiSdkError::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiSdkError::Network(e) if e.is_timeout())
    }
}

pub type ApiResult<T> = Result<T, ApiSdkError>;

/// Reads `key` as a number, failing when it is missing or not numeric.
pub fn extract_f64(result: &GenericResult, key: &str) -> ApiResult<f64> {
    match result.get(key) {
        Some(value) => value.as_f64().ok_or_else(|| {
            ApiSdkError::UnexpectedFormat(format!("field '{}' is not a number: {}", key, value))
        }),
        None => Err(ApiSdkError::UnexpectedFormat(format!("missing field '{}'", key))),
    }
}

/// Takes the array under `key`, keeping only the elements that are objects.
///
/// Server order is preserved. A missing key, or one that is not an array, is an error.
pub fn extract_list(mut result: GenericResult, key: &str) -> ApiResult<Vec<GenericResult>> {
    match result.remove(key) {
        Some(Value::Array(items)) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(object) => Some(object),
                _ => None,
            })
            .collect()),
        Some(other) => Err(ApiSdkError::UnexpectedFormat(format!(
            "field '{}' is not an array: {}",
            key, other
        ))),
        None => Err(ApiSdkError::UnexpectedFormat(format!("missing field '{}'", key))),
    }
}

/// Takes the nested object under `key`. A missing key, or one that is not an object, is an error.
pub fn extract_object(mut result: GenericResult, key: &str) -> ApiResult<GenericResult> {
    match result.remove(key) {
        Some(Value::Object(object)) => Ok(object),
        Some(other) => Err(ApiSdkError::UnexpectedFormat(format!(
            "field '{}' is not an object: {}",
            key, other
        ))),
        None => Err(ApiSdkError::UnexpectedFormat(format!("missing field '{}'", key))),
    }
}

/// Parses a generic result into a concrete record.
pub fn decode<T>(result: GenericResult) -> ApiResult<T>
where
    T: DeserializeOwned,
{
    serde_json::from_value(Value::Object(result))
        .map_err(|e| ApiSdkError::UnexpectedFormat(e.to_string()))
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct PagingContext {
    pub limit: u32,
    pub offset: u32,
}

impl PagingContext {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }
}

impl Default for PagingContext {
    fn default() -> Self {
        Self { limit: 50, offset: 0 }
    }
}
