use clap::{Subcommand, ValueEnum};
use strat_sdk::{StratClient, VoteRequest};

use crate::{
    commands::parse_json_arg,
    console::{Output, print_success_message},
    error::CliError,
};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ballot {
    Yes,
    No,
}

#[derive(Subcommand)]
pub enum GovernanceCommand {
    /// Create a proposal from a JSON payload
    Create { data: String },
    /// Show a proposal
    Get { proposal_id: u64 },
    /// Vote on a proposal
    Vote {
        proposal_id: u64,
        #[arg(value_enum)]
        ballot: Ballot,
        #[arg(long)]
        voter: String,
        #[arg(long, env = "STRAT_PRIVATE_KEY", hide_env_values = true)]
        private_key: String,
    },
    /// List proposals
    List {
        /// Only proposals in this state, e.g. active
        #[arg(long)]
        status: Option<String>,
    },
}

pub async fn handle_governance(
    command: &GovernanceCommand,
    client: &StratClient,
    output: &Output,
) -> Result<(), CliError> {
    match command {
        GovernanceCommand::Create { data } => {
            let payload = parse_json_arg("data", data)?;
            let result = client.governance.create_proposal(&payload).await?;
            if !output.json {
                print_success_message("Proposal created");
            }
            output.object("Proposal:", &result)?;
        }
        GovernanceCommand::Get { proposal_id } => {
            let proposal = client.governance.get_proposal(*proposal_id).await?;
            output.object(&format!("Proposal #{}:", proposal_id), &proposal)?;
        }
        GovernanceCommand::Vote { proposal_id, ballot, voter, private_key } => {
            let request = VoteRequest {
                proposal_id: *proposal_id,
                vote: *ballot == Ballot::Yes,
                voter: voter.clone(),
                private_key: private_key.clone(),
            };
            let result = client.governance.vote(&request).await?;
            output.object(&format!("Vote on #{}:", proposal_id), &result)?;
        }
        GovernanceCommand::List { status } => {
            let proposals = client.governance.list_proposals(status.as_deref()).await?;
            output.list("Proposals", &proposals)?;
        }
    }

    Ok(())
}
