use clap::Subcommand;
use strat_sdk::{from_wei, is_valid_address, to_wei};

use crate::{
    console::print_success_message,
    error::CliError,
};

#[derive(Subcommand)]
pub enum UtilCommand {
    /// Check that an address is 0x followed by 40 hex digits
    ValidateAddress { address: String },
    /// Convert whole coins to wei
    ToWei {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// Convert wei to whole coins
    FromWei {
        #[arg(allow_negative_numbers = true)]
        wei: i128,
    },
}

/// Runs locally, no node needed.
pub fn handle_util(command: &UtilCommand) -> Result<(), CliError> {
    match command {
        UtilCommand::ValidateAddress { address } => {
            if is_valid_address(address) {
                print_success_message(&format!("{} is a valid address", address));
            } else {
                return Err(CliError::InvalidArgument(format!("{} is not a valid address", address)));
            }
        }
        UtilCommand::ToWei { amount } => println!("{}", to_wei(*amount)),
        UtilCommand::FromWei { wei } => println!("{}", from_wei(*wei)),
    }

    Ok(())
}
