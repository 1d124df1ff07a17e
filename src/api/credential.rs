use base64::{Engine as _, engine::general_purpose};
use log::trace;
use std::fmt;

/// Raw access token for the EOL API.
///
/// The token is a secret generated on the arista.com profile page. It is
/// used exactly once, base64-encoded in the session request body, and is
/// never sent as a header or stored on the client.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the standard base64 encoding of the token bytes, the form
    /// the session endpoint expects in its `accessToken` field.
    pub fn encoded(&self) -> String {
        let encoded = general_purpose::STANDARD.encode(self.0.as_bytes());
        trace!("Encoded access token: {}", encoded);
        encoded
    }
}

// The raw token must not leak through debug logging
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccessToken(*** {} bytes ***)", self.0.len())
    }
}
