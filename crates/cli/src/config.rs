use std::{path::Path, time::Duration};

use clap::Args;
use strat_sdk::ClientConfig;

use crate::error::CliError;

#[derive(Args, Debug, Default, Clone)]
pub struct ConnectionArgs {
    /// Base URL of the STRAT node (overrides STRAT_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// API key sent as a bearer token (overrides STRAT_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Request timeout in seconds (overrides STRAT_TIMEOUT_SECS)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

/// Loads `.env` from `dir`, falling back to the usual dotenv lookup.
pub fn load_env_from_path(dir: &Path) {
    if dotenvy::from_path(dir.join(".env")).is_err() {
        dotenvy::dotenv().ok();
    }
}

/// Environment first, then command-line flags on top.
pub fn resolve_client_config(args: &ConnectionArgs) -> Result<ClientConfig, CliError> {
    let config = ClientConfig::from_env()?;
    Ok(apply_overrides(config, args))
}

pub fn apply_overrides(mut config: ClientConfig, args: &ConnectionArgs) -> ClientConfig {
    if let Some(api_url) = &args.api_url {
        config.base_url = api_url.clone();
    }
    if let Some(api_key) = &args.api_key {
        config.api_key = Some(api_key.clone());
    }
    if let Some(timeout) = args.timeout {
        config.timeout = Duration::from_secs(timeout);
    }
    config
}
