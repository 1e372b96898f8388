/*
[INPUT]:  Raw JSON response bodies
[OUTPUT]: Token exchange result and the custody response envelope
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new response shapes appear
*/

use serde::{Deserialize, Serialize};

use crate::http::{CustodyError, Result};

/// Response of the refresh-token exchange
#[derive(Debug, Clone, Deserialize)]
pub struct TokenExchangeResponse {
    /// Access token; absent or empty means the exchange failed
    #[serde(default)]
    pub jwt: Option<String>,
}

impl TokenExchangeResponse {
    /// Extract a usable access token
    pub fn into_token(self) -> Result<String> {
        match self.jwt {
            Some(jwt) if !jwt.trim().is_empty() => Ok(jwt),
            Some(_) => Err(CustodyError::token_exchange("response carries an empty jwt")),
            None => Err(CustodyError::token_exchange("response carries no jwt field")),
        }
    }
}

/// Envelope wrapping every custody API response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub successful: bool,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, mapping `successful: false` to an API error
    pub fn into_data(self) -> Result<T> {
        if !self.successful {
            return Err(CustodyError::Api {
                code: self.code,
                message: self.message,
            });
        }
        self.data.ok_or_else(|| {
            CustodyError::InvalidResponse("successful response without data".to_string())
        })
    }

    /// Check `successful` for endpoints that return no payload
    pub fn into_ack(self) -> Result<()> {
        if self.successful {
            Ok(())
        } else {
            Err(CustodyError::Api {
                code: self.code,
                message: self.message,
            })
        }
    }
}

/// Offset-paginated list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
}
