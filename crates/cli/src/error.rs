use thiserror::Error;

/// Top-level CLI error
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Sdk(#[from] strat_sdk::ApiSdkError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
