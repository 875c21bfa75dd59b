#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::{env, process::ExitCode};

use clap::Parser;
use strat_sdk::StratClient;
use tracing::debug;

use crate::{
    cli_interface::{Cli, Commands},
    commands::{
        blockchain, contract, explorer, governance, mempool, mining, nft, staking, tx, util, wallet,
    },
    config::{load_env_from_path, resolve_client_config},
    console::{Output, print_error_message},
    error::CliError,
};

mod cli_interface;
mod commands;
mod config;
mod console;
mod error;
mod logger;

#[tokio::main]
async fn main() -> ExitCode {
    // Before parsing, so `env = ...` arguments can come from .env
    if let Ok(current_dir) = env::current_dir() {
        load_env_from_path(&current_dir);
    }

    let cli = Cli::parse();
    logger::setup_cli_logger(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error_message(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    if let Commands::Util { command } = &cli.command {
        return util::handle_util(command);
    }

    let config = resolve_client_config(&cli.connection)?;
    debug!("using node at {} (timeout {:?})", config.base_url, config.timeout);
    let client = StratClient::new(config);
    let output = Output { json: cli.json };

    match &cli.command {
        Commands::Info => blockchain::handle_info(&client, &output).await?,
        Commands::Block { id } => blockchain::handle_block(id, &client, &output).await?,
        Commands::Blocks { limit } => blockchain::handle_blocks(*limit, &client, &output).await?,
        Commands::Health => blockchain::handle_health(&client, &output).await?,
        Commands::Version => blockchain::handle_version(&client, &output).await?,
        Commands::Tx { command } => tx::handle_tx(command, &client, &output).await?,
        Commands::Wallet { command } => wallet::handle_wallet(command, &client, &output).await?,
        Commands::Contract { command } => {
            contract::handle_contract(command, &client, &output).await?
        }
        Commands::Mining { command } => mining::handle_mining(command, &client, &output).await?,
        Commands::Staking { command } => staking::handle_staking(command, &client, &output).await?,
        Commands::Nft { command } => nft::handle_nft(command, &client, &output).await?,
        Commands::Gov { command } => {
            governance::handle_governance(command, &client, &output).await?
        }
        Commands::Mempool { command } => mempool::handle_mempool(command, &client, &output).await?,
        Commands::Explorer { command } => {
            explorer::handle_explorer(command, &client, &output).await?
        }
        Commands::Util { command } => util::handle_util(command)?,
    }

    Ok(())
}
