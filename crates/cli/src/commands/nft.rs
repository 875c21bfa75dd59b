use clap::Subcommand;
use strat_sdk::{StratClient, TransferNftRequest};

use crate::{
    commands::parse_json_arg,
    console::{Output, print_success_message},
    error::CliError,
};

#[derive(Subcommand)]
pub enum NftCommand {
    /// Mint a token from a JSON payload, e.g. '{"name":"Sword","owner":"0x.."}'
    Mint { data: String },
    /// Show a token
    Get { token_id: u64 },
    /// Move a token to another owner
    Transfer {
        token_id: u64,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long, env = "STRAT_PRIVATE_KEY", hide_env_values = true)]
        private_key: String,
    },
    /// List tokens held by an owner
    List { owner: String },
}

pub async fn handle_nft(
    command: &NftCommand,
    client: &StratClient,
    output: &Output,
) -> Result<(), CliError> {
    match command {
        NftCommand::Mint { data } => {
            let payload = parse_json_arg("data", data)?;
            let result = client.nft.mint(&payload).await?;
            if !output.json {
                print_success_message("Token minted");
            }
            output.object("NFT:", &result)?;
        }
        NftCommand::Get { token_id } => {
            let token = client.nft.get(*token_id).await?;
            output.object(&format!("NFT #{}:", token_id), &token)?;
        }
        NftCommand::Transfer { token_id, from, to, private_key } => {
            let request = TransferNftRequest {
                token_id: *token_id,
                from: from.clone(),
                to: to.clone(),
                private_key: private_key.clone(),
            };
            let result = client.nft.transfer(&request).await?;
            output.object(&format!("Transfer of #{}:", token_id), &result)?;
        }
        NftCommand::List { owner } => {
            let tokens = client.nft.list(owner).await?;
            output.list(&format!("NFTs of {}", owner), &tokens)?;
        }
    }

    Ok(())
}
