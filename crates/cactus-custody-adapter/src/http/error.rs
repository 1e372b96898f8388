/*
[INPUT]:  Error sources (transport, signing, key parsing, token exchange, API envelope)
[OUTPUT]: Structured error kinds callers can branch on
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or changing retry classification
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the custody adapter
#[derive(Error, Debug)]
pub enum CustodyError {
    /// Request body or parameters could not be serialized
    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// Producing a signature or nonce failed
    #[error("Signing failed: {0}")]
    Signing(String),

    /// Private key material could not be parsed
    #[error("Invalid private key: {0}")]
    InvalidKey(String),

    /// Connection, DNS, timeout or body read failure
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Refresh token could not be exchanged for an access token
    #[error("Token exchange failed{}: {message}", status_suffix(.status))]
    TokenExchange {
        status: Option<StatusCode>,
        message: String,
    },

    /// Server kept rejecting the access token after a forced refresh
    #[error("Authentication rejected with status {status} after {attempts} attempts")]
    AuthenticationRejected { status: StatusCode, attempts: u32 },

    /// API envelope reported a failure
    #[error("API error (code {code}): {message}")]
    Api { code: i64, message: String },

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

fn status_suffix(status: &Option<StatusCode>) -> String {
    status.map(|s| format!(" (status {s})")).unwrap_or_default()
}

impl CustodyError {
    /// Only transport failures are worth retrying; everything else is deterministic
    pub fn is_retryable(&self) -> bool {
        matches!(self, CustodyError::Transport(_))
    }

    /// Check if error indicates an authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            CustodyError::TokenExchange { .. }
                | CustodyError::AuthenticationRejected { .. }
                | CustodyError::InvalidKey(_)
        )
    }

    /// Create a token exchange error without an HTTP status
    pub fn token_exchange(message: impl Into<String>) -> Self {
        CustodyError::TokenExchange {
            status: None,
            message: message.into(),
        }
    }
}

/// Result type alias for custody operations
pub type Result<T> = std::result::Result<T, CustodyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        let rejected = CustodyError::AuthenticationRejected {
            status: StatusCode::FORBIDDEN,
            attempts: 2,
        };
        assert!(!rejected.is_retryable());
        assert!(!CustodyError::Signing("boom".into()).is_retryable());
    }

    #[test]
    fn test_error_is_auth_error() {
        assert!(CustodyError::token_exchange("missing jwt").is_auth_error());
        assert!(CustodyError::InvalidKey("bad pem".into()).is_auth_error());
        assert!(!CustodyError::Config("x".into()).is_auth_error());
    }

    #[test]
    fn test_error_messages() {
        let err = CustodyError::TokenExchange {
            status: Some(StatusCode::UNAUTHORIZED),
            message: "refresh token revoked".into(),
        };
        assert_eq!(
            err.to_string(),
            "Token exchange failed (status 401 Unauthorized): refresh token revoked"
        );
        assert_eq!(
            CustodyError::token_exchange("missing jwt").to_string(),
            "Token exchange failed: missing jwt"
        );

        let err = CustodyError::AuthenticationRejected {
            status: StatusCode::FORBIDDEN,
            attempts: 2,
        };
        assert_eq!(
            err.to_string(),
            "Authentication rejected with status 403 Forbidden after 2 attempts"
        );
    }
}
