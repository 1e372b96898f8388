/*
[INPUT]:  Access tokens returned by the token exchange
[OUTPUT]: Cached bearer token with single-writer refresh
[POS]:    Auth layer - access token lifecycle for the bearer scheme
[UPDATE]: When changing refresh policy or token storage strategy
*/

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::http::{CustodyError, Result};

/// Access token plus the time it was obtained
#[derive(Clone)]
pub struct AccessToken {
    value: Arc<str>,
    obtained_at: DateTime<Utc>,
}

impl AccessToken {
    fn new(value: String) -> Self {
        Self {
            value: Arc::from(value),
            obtained_at: Utc::now(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn obtained_at(&self) -> DateTime<Utc> {
        self.obtained_at
    }

    /// `Authorization` header value
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.value)
    }
}

impl PartialEq for AccessToken {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"<redacted>")
            .field("obtained_at", &self.obtained_at)
            .finish()
    }
}

/// In-memory access token cache.
///
/// The lock is held across an exchange so that concurrent callers never run
/// two exchanges that overwrite each other. A token is only ever replaced,
/// never merged or cleared.
#[derive(Debug, Clone, Default)]
pub struct AccessTokenCache {
    slot: Arc<Mutex<Option<AccessToken>>>,
}

impl AccessTokenCache {
    /// Create a cache in the `NoToken` state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current token, if one has been obtained
    pub async fn current(&self) -> Option<AccessToken> {
        self.slot.lock().await.clone()
    }

    /// Return the cached token, running `exchange` only when none is cached
    pub async fn get_or_exchange<F, Fut>(&self, exchange: F) -> Result<AccessToken>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        let mut slot = self.slot.lock().await;
        if let Some(token) = slot.as_ref() {
            return Ok(token.clone());
        }

        let token = validated(exchange().await?)?;
        *slot = Some(token.clone());
        Ok(token)
    }

    /// Replace a token the server rejected.
    ///
    /// If another caller already swapped `rejected` for a newer token while we
    /// waited for the lock, that token is returned without a second exchange.
    pub async fn refresh_after_rejection<F, Fut>(
        &self,
        rejected: &AccessToken,
        exchange: F,
    ) -> Result<AccessToken>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        let mut slot = self.slot.lock().await;
        if let Some(current) = slot.as_ref()
            && current != rejected
        {
            return Ok(current.clone());
        }

        let token = validated(exchange().await?)?;
        *slot = Some(token.clone());
        Ok(token)
    }
}

fn validated(value: String) -> Result<AccessToken> {
    if value.trim().is_empty() {
        return Err(CustodyError::token_exchange("exchange returned an empty access token"));
    }
    Ok(AccessToken::new(value))
}
