use strat_sdk::StratClient;

use crate::{
    console::{Output, print_table},
    error::CliError,
};

pub async fn handle_info(client: &StratClient, output: &Output) -> Result<(), CliError> {
    let info = client.blockchain.get_info().await?;
    output.object("Blockchain:", &info)?;
    Ok(())
}

pub async fn handle_block(
    identifier: &str,
    client: &StratClient,
    output: &Output,
) -> Result<(), CliError> {
    let block = client.blockchain.get_block(identifier).await?;
    output.object(&format!("Block {}:", identifier), &block)?;
    Ok(())
}

pub async fn handle_blocks(count: u32, client: &StratClient, output: &Output) -> Result<(), CliError> {
    let blocks = client.blockchain.get_latest_blocks(count).await?;
    output.list("Latest blocks", &blocks)?;
    Ok(())
}

pub async fn handle_version(client: &StratClient, output: &Output) -> Result<(), CliError> {
    let version = client.health.version().await?;
    if output.json {
        println!("{}", serde_json::to_string_pretty(&version)?);
        return Ok(());
    }

    let rows: Vec<Vec<String>> = version
        .endpoints
        .iter()
        .map(|(area, path)| vec![area.clone(), path.clone()])
        .collect();
    let title = format!("{} {}", version.name, version.version);
    let footer = version.documentation.as_ref().map(|docs| format!("Documentation: {}", docs));
    print_table(vec!["Area", "Path"], rows, Some(&title), footer.as_deref());
    Ok(())
}

pub async fn handle_health(client: &StratClient, output: &Output) -> Result<(), CliError> {
    let status = client.health_check().await?;
    output.object("Node health:", &status)?;
    Ok(())
}
