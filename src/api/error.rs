use reqwest::StatusCode;
use thiserror::Error;

/// Maximum length for response bodies carried in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Failure of a single API exchange.
///
/// The variants stay distinguishable so embedding callers can react to a
/// server rejection differently from a network fault. Nothing is retried
/// here.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Malformed API response: {0}")]
    MalformedResponse(String),
}

impl ApiError {
    pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
        ApiError::Status {
            status,
            body: truncate_body(body),
        }
    }

    /// True for statuses that mean the token or session was rejected.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            ApiError::Status { status, .. }
                if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
        )
    }
}

/// Truncate a response body to avoid carrying excessive data in errors
fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_LENGTH {
        return body.to_string();
    }

    // A fixed cut can land inside a multi-byte character
    let mut end = MAX_ERROR_BODY_LENGTH;
    while !body.is_char_boundary(end) {
        end -= 1;
    }

    format!(
        "{}... (truncated, {} total bytes)",
        &body[..end],
        body.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_keeps_short_body() {
        let err = ApiError::from_status(StatusCode::UNAUTHORIZED, r#"{"error": "bad token"}"#);
        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, StatusCode::UNAUTHORIZED);
                assert_eq!(body, r#"{"error": "bad token"}"#);
            }
            other => panic!("Expected Status error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_status_truncates_long_body() {
        let long_body = "x".repeat(2000);
        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, &long_body);
        match err {
            ApiError::Status { body, .. } => {
                assert!(body.starts_with(&"x".repeat(MAX_ERROR_BODY_LENGTH)));
                assert!(body.ends_with("(truncated, 2000 total bytes)"));
                assert!(body.len() < long_body.len());
            }
            other => panic!("Expected Status error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_status_truncates_multibyte_body() {
        // 601 bytes; a cut at byte 500 falls inside a two-byte character
        let long_body = format!("a{}", "é".repeat(300));
        let err = ApiError::from_status(StatusCode::BAD_GATEWAY, &long_body);
        match err {
            ApiError::Status { body, .. } => {
                let kept = body
                    .strip_suffix("... (truncated, 601 total bytes)")
                    .expect("truncation marker missing");
                assert_eq!(kept.len(), 499);
                assert!(kept.starts_with("aé"));
            }
            other => panic!("Expected Status error, got {:?}", other),
        }
    }

    #[test]
    fn test_is_auth_failure() {
        assert!(ApiError::from_status(StatusCode::UNAUTHORIZED, "").is_auth_failure());
        assert!(ApiError::from_status(StatusCode::FORBIDDEN, "").is_auth_failure());
        assert!(!ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "").is_auth_failure());
        assert!(!ApiError::MalformedResponse("not json".to_string()).is_auth_failure());
    }

    #[test]
    fn test_status_display_includes_code() {
        let err = ApiError::from_status(StatusCode::NOT_FOUND, "missing");
        let message = err.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("missing"));
    }
}
