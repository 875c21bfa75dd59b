use strat_sdk::{ClientConfig, PagingContext, StratClient, from_wei, is_valid_address, to_wei};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Reads STRAT_API_URL / STRAT_API_KEY / STRAT_TIMEOUT_SECS, defaulting to a local node
    let client = StratClient::new(ClientConfig::from_env()?);

    match client.health_check().await {
        Ok(status) => println!("✅ Node is up: {:?}", status),
        Err(e) => println!("❌ Health check failed: {}", e),
    }

    match client.blockchain.get_info().await {
        Ok(info) => println!("✅ Chain info: {}", serde_json::Value::Object(info)),
        Err(e) => println!("❌ Failed to get chain info: {}", e),
    }

    match client.blockchain.get_latest_blocks(5).await {
        Ok(blocks) => println!("✅ Fetched {} recent blocks", blocks.len()),
        Err(e) => println!("❌ Failed to get blocks: {}", e),
    }

    let address = "0x1234567890abcdef1234567890abcdef12345678";
    if is_valid_address(address) {
        match client.wallet.get_balance(address).await {
            Ok(balance) => println!("✅ Balance: {} STRAT ({} wei)", balance, to_wei(balance)),
            Err(e) => println!("❌ Failed to get balance: {}", e),
        }

        match client.transaction.get_history(address, &PagingContext::new(10, 0)).await {
            Ok(history) => println!("✅ {} transactions in history", history.len()),
            Err(e) => println!("❌ Failed to get history: {}", e),
        }
    }

    println!("1 STRAT = {} wei, 1e18 wei = {} STRAT", to_wei(1.0), from_wei(1_000_000_000_000_000_000));

    Ok(())
}
