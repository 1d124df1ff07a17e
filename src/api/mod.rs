//! Client module for the Arista EOL web API.
//!
//! The API issues a session code in exchange for a base64-encoded access
//! token; the session code then authorizes hardware and software lifecycle
//! lookups. All three exchanges are JSON POSTs against a fixed host.

pub mod client;
pub mod credential;
pub mod error;

pub use client::{DEFAULT_API_URL, EolClient, EolRecord};
pub use credential::AccessToken;
pub use error::ApiError;
