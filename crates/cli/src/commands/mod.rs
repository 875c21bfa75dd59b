pub mod blockchain;
pub mod contract;
pub mod explorer;
pub mod governance;
pub mod mempool;
pub mod mining;
pub mod nft;
pub mod staking;
pub mod tx;
pub mod util;
pub mod wallet;

use serde_json::Value;

use crate::error::CliError;

/// Parses a JSON argument such as `'{"name":"Sword"}'`.
pub fn parse_json_arg(name: &str, raw: &str) -> Result<Value, CliError> {
    serde_json::from_str(raw)
        .map_err(|e| CliError::InvalidArgument(format!("{} is not valid JSON: {}", name, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_json_arg() {
        assert_eq!(parse_json_arg("data", r#"{"a":1}"#).unwrap(), json!({ "a": 1 }));
        assert!(matches!(parse_json_arg("data", "{a:1}"), Err(CliError::InvalidArgument(_))));
    }
}
