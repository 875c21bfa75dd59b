use clap::Subcommand;
use strat_sdk::StratClient;

use crate::{console::Output, error::CliError};

#[derive(Subcommand)]
pub enum MempoolCommand {
    /// Show mempool size and fee statistics
    Stats,
    /// List transactions currently in the mempool
    Txs,
}

pub async fn handle_mempool(
    command: &MempoolCommand,
    client: &StratClient,
    output: &Output,
) -> Result<(), CliError> {
    match command {
        MempoolCommand::Stats => output.object("Mempool:", &client.mempool.get_stats().await?)?,
        MempoolCommand::Txs => {
            output.list("Mempool transactions", &client.mempool.get_transactions().await?)?
        }
    }

    Ok(())
}
