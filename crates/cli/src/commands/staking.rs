use clap::Subcommand;
use strat_sdk::StratClient;

use crate::{
    console::{Output, print_success_message},
    error::CliError,
};

#[derive(Subcommand)]
pub enum StakingCommand {
    /// Lock coins for staking
    Stake {
        address: String,
        amount: f64,
        #[arg(long, env = "STRAT_PRIVATE_KEY", hide_env_values = true)]
        private_key: String,
    },
    /// Release staked coins
    Unstake {
        address: String,
        amount: f64,
        #[arg(long, env = "STRAT_PRIVATE_KEY", hide_env_values = true)]
        private_key: String,
    },
    /// Show the staking position of an address
    Info { address: String },
    /// Claim accumulated staking rewards
    Claim {
        address: String,
        #[arg(long, env = "STRAT_PRIVATE_KEY", hide_env_values = true)]
        private_key: String,
    },
}

pub async fn handle_staking(
    command: &StakingCommand,
    client: &StratClient,
    output: &Output,
) -> Result<(), CliError> {
    match command {
        StakingCommand::Stake { address, amount, private_key } => {
            let result = client.staking.stake(address, *amount, private_key).await?;
            if !output.json {
                print_success_message(&format!("Staked {} from {}", amount, address));
            }
            output.object("Stake:", &result)?;
        }
        StakingCommand::Unstake { address, amount, private_key } => {
            let result = client.staking.unstake(address, *amount, private_key).await?;
            if !output.json {
                print_success_message(&format!("Unstaked {} to {}", amount, address));
            }
            output.object("Unstake:", &result)?;
        }
        StakingCommand::Info { address } => {
            let info = client.staking.get_info(address).await?;
            output.object(&format!("Staking for {}:", address), &info)?;
        }
        StakingCommand::Claim { address, private_key } => {
            let result = client.staking.claim_rewards(address, private_key).await?;
            output.object("Rewards:", &result)?;
        }
    }

    Ok(())
}
