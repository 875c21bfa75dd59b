use clap::{Args, Subcommand};
use strat_sdk::{PagingContext, SendTransactionRequest, StratClient};

use crate::{
    console::{Output, print_success_message},
    error::CliError,
};

#[derive(Subcommand)]
pub enum TxCommand {
    /// Get a transaction by ID
    Get { tx_id: String },
    /// Send coins from one address to another
    Send(SendArgs),
    /// List the transactions of an address
    History {
        address: String,
        #[arg(long, default_value_t = 50)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// List transactions waiting to be mined
    Pending,
}

#[derive(Args)]
pub struct SendArgs {
    /// Sender address
    #[arg(long)]
    pub from: String,
    /// Recipient address
    #[arg(long)]
    pub to: String,
    /// Amount in whole coins
    #[arg(long)]
    pub amount: f64,
    /// Sender's private key, forwarded to the node
    #[arg(long, env = "STRAT_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: String,
}

pub async fn handle_tx(
    command: &TxCommand,
    client: &StratClient,
    output: &Output,
) -> Result<(), CliError> {
    match command {
        TxCommand::Get { tx_id } => {
            let transaction = client.transaction.get(tx_id).await?;
            output.object(&format!("Transaction {}:", tx_id), &transaction)?;
        }
        TxCommand::Send(args) => {
            let request = SendTransactionRequest {
                from_address: args.from.clone(),
                to_address: args.to.clone(),
                amount: args.amount,
                private_key: args.private_key.clone(),
            };
            let result = client.transaction.send(&request).await?;
            if !output.json {
                print_success_message(&format!("Sent {} from {} to {}", args.amount, args.from, args.to));
            }
            output.object("Transaction:", &result)?;
        }
        TxCommand::History { address, limit, offset } => {
            let history =
                client.transaction.get_history(address, &PagingContext::new(*limit, *offset)).await?;
            output.list(&format!("Transactions of {}", address), &history)?;
        }
        TxCommand::Pending => {
            let pending = client.transaction.get_pending().await?;
            output.list("Pending transactions", &pending)?;
        }
    }

    Ok(())
}
