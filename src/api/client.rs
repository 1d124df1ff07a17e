use log::{debug, info};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::fmt;

use super::credential::AccessToken;
use super::error::ApiError;

/// Base URL of the production EOL API.
pub const DEFAULT_API_URL: &str = "https://www.arista.com";

/// Lifecycle data for a single SKU or release train.
///
/// The upstream response shape is not contractually fixed, so the `data`
/// object is passed through verbatim with all fields preserved.
pub type EolRecord = serde_json::Map<String, Value>;

/// Wire format of the EOL API responses.
mod wire {
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    pub struct SessionResponse {
        pub data: SessionData,
    }

    #[derive(Deserialize, Debug)]
    pub struct SessionData {
        pub session_code: String,
    }

    #[derive(Deserialize, Debug)]
    pub struct LifecycleResponse {
        pub data: super::EolRecord,
    }
}

/// Authenticated handle to the EOL API.
///
/// [`EolClient::authenticate`] is the only constructor, so an instance
/// always holds a session code the server has issued. The session code is
/// written once there and only read afterwards; all query methods take
/// `&self` and instances can be shared freely for concurrent lookups.
pub struct EolClient {
    client: Client,
    api_url: String,
    session_code: String,
}

impl EolClient {
    /// Exchanges the access token for a session code.
    ///
    /// Performs one POST to the session endpoint. `api_url` of `None`
    /// selects [`DEFAULT_API_URL`]. Fails with [`ApiError::Status`] when
    /// the server rejects the token, [`ApiError::Transport`] on network
    /// failure, and [`ApiError::MalformedResponse`] when the body is not
    /// JSON carrying `data.session_code`.
    #[tracing::instrument(skip(client, token))]
    pub async fn authenticate(
        client: Client,
        api_url: Option<String>,
        token: &AccessToken,
    ) -> Result<Self, ApiError> {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let url = format!("{}/api/sessionCode/", api_url);
        let body = json!({ "accessToken": token.encoded() });

        debug!("Requesting session code from {}...", url);

        let response: wire::SessionResponse = post_json(&client, &url, &body).await?;

        info!("Successfully authenticated");

        Ok(Self {
            client,
            api_url,
            session_code: response.data.session_code,
        })
    }

    /// Returns the session code issued at construction.
    pub fn session_code(&self) -> &str {
        &self.session_code
    }

    /// Looks up lifecycle data for a hardware SKU.
    ///
    /// The SKU is not validated locally; the server is the authority on
    /// what constitutes a valid SKU.
    #[tracing::instrument(skip(self))]
    pub async fn hardware_check(&self, sku: &str) -> Result<EolRecord, ApiError> {
        let url = format!("{}/api/eox/hwLifecycle/", self.api_url);
        let body = json!({
            "sessionCode": self.session_code,
            "mainSku": sku,
        });

        debug!("Fetching hardware lifecycle for {} from {}...", sku, url);

        let response: wire::LifecycleResponse = post_json(&self.client, &url, &body).await?;
        Ok(response.data)
    }

    /// Looks up lifecycle data for an EOS release train.
    #[tracing::instrument(skip(self))]
    pub async fn software_check(&self, release_train: &str) -> Result<EolRecord, ApiError> {
        let url = format!("{}/api/eox/swLifecycle/", self.api_url);
        let body = json!({
            "sessionCode": self.session_code,
            "releaseTrain": release_train,
        });

        debug!(
            "Fetching software lifecycle for {} from {}...",
            release_train, url
        );

        let response: wire::LifecycleResponse = post_json(&self.client, &url, &body).await?;
        Ok(response.data)
    }
}

// The session code must not leak through debug logging
impl fmt::Debug for EolClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EolClient")
            .field("api_url", &self.api_url)
            .field("session_code", &"***")
            .finish_non_exhaustive()
    }
}

/// POSTs a JSON body and decodes the JSON response.
///
/// Non-2xx responses become [`ApiError::Status`] with the body attached;
/// bodies that fail to decode become [`ApiError::MalformedResponse`].
#[tracing::instrument(skip(client, body))]
async fn post_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    body: &Value,
) -> Result<T, ApiError> {
    let response = client.post(url).json(body).send().await?;

    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        return Err(ApiError::from_status(status, &text));
    }

    serde_json::from_str(&text).map_err(|e| ApiError::MalformedResponse(e.to_string()))
}
