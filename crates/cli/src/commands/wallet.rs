use clap::Subcommand;
use strat_sdk::{StratClient, to_wei};

use crate::{
    console::{Output, print_success_message, print_table},
    error::CliError,
};

#[derive(Subcommand)]
pub enum WalletCommand {
    /// Register an account, creating its wallet on the node
    Create {
        username: String,
        #[arg(long, env = "STRAT_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Show the balance of an address
    Balance { address: String },
    /// Show wallet details
    Info { address: String },
    /// List unspent outputs of an address
    Utxos { address: String },
}

pub async fn handle_wallet(
    command: &WalletCommand,
    client: &StratClient,
    output: &Output,
) -> Result<(), CliError> {
    match command {
        WalletCommand::Create { username, password } => {
            let wallet = client.wallet.create(username, password).await?;
            if !output.json {
                print_success_message(&format!("Wallet created for {}", username));
            }
            output.object("Wallet:", &wallet)?;
        }
        WalletCommand::Balance { address } => {
            let balance = client.wallet.get_balance(address).await?;
            if output.json {
                println!("{}", serde_json::json!({ "address": address, "balance": balance }));
            } else {
                print_table(
                    vec!["Address", "Balance", "Wei"],
                    vec![vec![address.clone(), balance.to_string(), to_wei(balance).to_string()]],
                    None,
                    None,
                );
            }
        }
        WalletCommand::Info { address } => {
            let info = client.wallet.get_info(address).await?;
            output.object(&format!("Wallet {}:", address), &info)?;
        }
        WalletCommand::Utxos { address } => {
            let utxos = client.wallet.get_utxos(address).await?;
            output.list(&format!("UTXOs of {}", address), &utxos)?;
        }
    }

    Ok(())
}
