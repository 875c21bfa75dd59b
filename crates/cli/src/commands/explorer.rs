use clap::Subcommand;
use strat_sdk::StratClient;

use crate::{console::Output, error::CliError};

#[derive(Subcommand)]
pub enum ExplorerCommand {
    /// Look up everything known about an address
    Address { address: String },
    /// Show the largest balances
    RichList {
        #[arg(long, default_value_t = 100)]
        limit: u32,
    },
    /// Show network-wide statistics
    Stats,
}

pub async fn handle_explorer(
    command: &ExplorerCommand,
    client: &StratClient,
    output: &Output,
) -> Result<(), CliError> {
    match command {
        ExplorerCommand::Address { address } => {
            let details = client.explorer.search_address(address).await?;
            output.object(&format!("Address {}:", address), &details)?;
        }
        ExplorerCommand::RichList { limit } => {
            let accounts = client.explorer.get_rich_list(*limit).await?;
            output.list("Rich list", &accounts)?;
        }
        ExplorerCommand::Stats => {
            let stats = client.explorer.get_network_stats().await?;
            output.object("Network:", &stats)?;
        }
    }

    Ok(())
}
