use clap::Subcommand;
use strat_sdk::StratClient;

use crate::{
    console::{Output, print_success_message},
    error::CliError,
};

#[derive(Subcommand)]
pub enum MiningCommand {
    /// Show the node's mining status
    Info,
    /// Start mining, paying rewards to the given address
    Start { miner_address: String },
    /// Stop mining
    Stop,
    /// Show mining statistics of an address
    Stats { address: String },
}

pub async fn handle_mining(
    command: &MiningCommand,
    client: &StratClient,
    output: &Output,
) -> Result<(), CliError> {
    match command {
        MiningCommand::Info => {
            let info = client.mining.get_info().await?;
            output.object("Mining:", &info)?;
        }
        MiningCommand::Start { miner_address } => {
            let result = client.mining.start(miner_address).await?;
            if !output.json {
                print_success_message(&format!("Mining started for {}", miner_address));
            }
            output.object("Mining:", &result)?;
        }
        MiningCommand::Stop => {
            let result = client.mining.stop().await?;
            if !output.json {
                print_success_message("Mining stopped");
            }
            output.object("Mining:", &result)?;
        }
        MiningCommand::Stats { address } => {
            let stats = client.mining.get_stats(address).await?;
            output.object(&format!("Mining stats for {}:", address), &stats)?;
        }
    }

    Ok(())
}
