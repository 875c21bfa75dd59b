use clap::Subcommand;
use serde_json::Value;
use strat_sdk::{CallContractRequest, DeployContractRequest, PagingContext, StratClient};

use crate::{
    commands::parse_json_arg,
    console::{Output, print_success_message},
    error::CliError,
};

#[derive(Subcommand)]
pub enum ContractCommand {
    /// Deploy contract source code
    Deploy {
        /// Contract source
        #[arg(long)]
        code: String,
        #[arg(long)]
        owner: String,
        #[arg(long, env = "STRAT_PRIVATE_KEY", hide_env_values = true)]
        private_key: String,
    },
    /// Call a contract method
    Call {
        contract_address: String,
        method: String,
        /// Positional parameters as a JSON array, e.g. '["0xabc", 10]'
        #[arg(long, default_value = "[]")]
        params: String,
        #[arg(long)]
        caller: String,
        #[arg(long, env = "STRAT_PRIVATE_KEY", hide_env_values = true)]
        private_key: String,
    },
    /// Show a deployed contract
    Get { contract_address: String },
    /// Show a contract's storage
    State { contract_address: String },
    /// List deployed contracts
    List {
        #[arg(long, default_value_t = 50)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
}

fn parse_params(raw: &str) -> Result<Vec<Value>, CliError> {
    match parse_json_arg("--params", raw)? {
        Value::Array(params) => Ok(params),
        _ => Err(CliError::InvalidArgument("--params must be a JSON array".to_string())),
    }
}

pub async fn handle_contract(
    command: &ContractCommand,
    client: &StratClient,
    output: &Output,
) -> Result<(), CliError> {
    match command {
        ContractCommand::Deploy { code, owner, private_key } => {
            let request = DeployContractRequest {
                code: code.clone(),
                owner: owner.clone(),
                private_key: private_key.clone(),
            };
            let result = client.contract.deploy(&request).await?;
            if !output.json {
                print_success_message("Contract deployed");
            }
            output.object("Deployment:", &result)?;
        }
        ContractCommand::Call { contract_address, method, params, caller, private_key } => {
            let request = CallContractRequest {
                contract_address: contract_address.clone(),
                method: method.clone(),
                params: parse_params(params)?,
                caller: caller.clone(),
                private_key: private_key.clone(),
            };
            let result = client.contract.call(&request).await?;
            output.object(&format!("{}.{}:", contract_address, method), &result)?;
        }
        ContractCommand::Get { contract_address } => {
            let contract = client.contract.get(contract_address).await?;
            output.object(&format!("Contract {}:", contract_address), &contract)?;
        }
        ContractCommand::State { contract_address } => {
            let state = client.contract.get_state(contract_address).await?;
            output.object(&format!("State of {}:", contract_address), &state)?;
        }
        ContractCommand::List { limit, offset } => {
            let contracts = client.contract.list(&PagingContext::new(*limit, *offset)).await?;
            output.list("Contracts", &contracts)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_params() {
        assert_eq!(parse_params(r#"["0xabc", 10]"#).unwrap(), vec![json!("0xabc"), json!(10)]);
        assert!(parse_params("[]").unwrap().is_empty());
        assert!(matches!(parse_params(r#"{"a":1}"#), Err(CliError::InvalidArgument(_))));
    }
}
