use anyhow::{Context, Result};

use crate::api::{AccessToken, EolClient, EolRecord};

pub mod config;

use config::Config;

/// Look up end-of-life dates for a hardware SKU and print them as JSON.
#[tracing::instrument(skip(token, api_url))]
pub async fn hardware(
    token: AccessToken,
    sku: &str,
    api_url: Option<String>,
    timeout_secs: Option<u64>,
) -> Result<()> {
    let config = Config::new(api_url, timeout_secs)?;
    let client = authenticate(config, &token).await?;

    let record = client
        .hardware_check(sku)
        .await
        .with_context(|| format!("Failed to fetch hardware lifecycle for {}", sku))?;

    print_record(&record)
}

/// Look up end-of-life dates for an EOS release train and print them as JSON.
#[tracing::instrument(skip(token, api_url))]
pub async fn software(
    token: AccessToken,
    release_train: &str,
    api_url: Option<String>,
    timeout_secs: Option<u64>,
) -> Result<()> {
    let config = Config::new(api_url, timeout_secs)?;
    let client = authenticate(config, &token).await?;

    let record = client
        .software_check(release_train)
        .await
        .with_context(|| format!("Failed to fetch software lifecycle for {}", release_train))?;

    print_record(&record)
}

async fn authenticate(config: Config, token: &AccessToken) -> Result<EolClient> {
    match EolClient::authenticate(config.client, config.api_url, token).await {
        Ok(client) => Ok(client),
        Err(e) if e.is_auth_failure() => {
            Err(e).context("Authentication rejected; check the access token")
        }
        Err(e) => Err(e).context("Failed to authenticate with the EOL API"),
    }
}

fn print_record(record: &EolRecord) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(record)?);
    Ok(())
}
