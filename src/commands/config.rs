use anyhow::Result;
use reqwest::Client;
use std::time::Duration;

/// HTTP settings shared by every command.
pub struct Config {
    pub client: Client,
    pub api_url: Option<String>,
}

impl Config {
    /// Builds the HTTP client. No timeout is applied unless the caller
    /// asked for one explicitly.
    pub fn new(api_url: Option<String>, timeout_secs: Option<u64>) -> Result<Self> {
        let mut builder = Client::builder().user_agent("aeol-cli");

        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder.build()?;

        Ok(Self { client, api_url })
    }
}
