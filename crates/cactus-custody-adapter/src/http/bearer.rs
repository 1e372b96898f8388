/*
[INPUT]:  Logical requests and a refresh-token credential
[OUTPUT]: Bearer-authenticated responses with one forced refresh on 403
[POS]:    HTTP layer - access-token authentication scheme
[UPDATE]: When the exchange endpoint or rejection handling changes
*/

use std::collections::BTreeMap;
use std::sync::Arc;

use bytes::Bytes;
use reqwest::{Method, StatusCode};
use tracing::{debug, info, warn};

use crate::auth::canonical::JSON_MEDIA_TYPE;
use crate::auth::{AccessToken, AccessTokenCache, RefreshTokenCredential};
use crate::http::signed::{HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE};
use crate::http::{
    CustodyError, HttpSend, Result, SignableRequest, TransportRequest, TransportResponse,
};
use crate::types::{TokenExchangeRequest, TokenExchangeResponse};

/// Status the server uses to reject an expired or revoked access token
pub const REJECTION_STATUS: StatusCode = StatusCode::FORBIDDEN;

/// Total sends allowed per logical call: the first send and one replay
const MAX_ATTEMPTS: u32 = 2;

/// Longest response excerpt kept in exchange errors
const ERROR_BODY_LIMIT: usize = 256;

/// Client that authenticates with a cached access token.
///
/// The token is fetched lazily on first use. When a call is rejected with 403
/// the client exchanges the refresh token once more and replays the call once;
/// a second rejection is returned as [`CustodyError::AuthenticationRejected`].
#[derive(Debug, Clone)]
pub struct TokenClient {
    base_url: String,
    token_path: String,
    credential: RefreshTokenCredential,
    transport: Arc<dyn HttpSend>,
    cache: AccessTokenCache,
}

impl TokenClient {
    pub fn new(
        base_url: impl Into<String>,
        token_path: impl Into<String>,
        credential: RefreshTokenCredential,
        transport: Arc<dyn HttpSend>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            token_path: token_path.into(),
            credential,
            transport,
            cache: AccessTokenCache::new(),
        }
    }

    pub fn cache(&self) -> &AccessTokenCache {
        &self.cache
    }

    /// Cached access token, exchanging the refresh token if none is cached yet
    pub async fn access_token(&self) -> Result<AccessToken> {
        self.cache.get_or_exchange(|| self.exchange()).await
    }

    /// Send a request with the cached token, refreshing once on rejection
    pub async fn execute(&self, request: &SignableRequest) -> Result<Bytes> {
        let token = self.access_token().await?;
        let response = self.send_with_token(request, &token).await?;
        if response.status != REJECTION_STATUS {
            return Ok(response.body);
        }

        warn!(
            method = %request.method,
            path = %request.path,
            "access token rejected, refreshing and replaying once"
        );
        let token = self
            .cache
            .refresh_after_rejection(&token, || self.exchange())
            .await?;

        let response = self.send_with_token(request, &token).await?;
        if response.status == REJECTION_STATUS {
            warn!(path = %request.path, "access token rejected again after refresh");
            return Err(CustodyError::AuthenticationRejected {
                status: response.status,
                attempts: MAX_ATTEMPTS,
            });
        }
        Ok(response.body)
    }

    async fn send_with_token(
        &self,
        request: &SignableRequest,
        token: &AccessToken,
    ) -> Result<TransportResponse> {
        let mut headers = BTreeMap::new();
        headers.insert(HEADER_CONTENT_TYPE.to_string(), JSON_MEDIA_TYPE.to_string());
        headers.insert(HEADER_AUTHORIZATION.to_string(), token.bearer());

        debug!(method = %request.method, path = %request.path, "sending bearer request");
        let response = self
            .transport
            .send(TransportRequest {
                method: request.method.clone(),
                url: request.url(&self.base_url),
                headers,
                body: request.payload().map(<[u8]>::to_vec),
            })
            .await?;
        debug!(status = %response.status, path = %request.path, "bearer request completed");
        Ok(response)
    }

    /// Exchange the refresh token for a new access token
    async fn exchange(&self) -> Result<String> {
        let body = serde_json::to_vec(&TokenExchangeRequest::new(self.credential.expose()))?;
        let headers = BTreeMap::from([(
            HEADER_CONTENT_TYPE.to_string(),
            JSON_MEDIA_TYPE.to_string(),
        )]);

        let response = self
            .transport
            .send(TransportRequest {
                method: Method::POST,
                url: format!("{}{}", self.base_url, self.token_path),
                headers,
                body: Some(body),
            })
            .await?;

        if !response.status.is_success() {
            return Err(CustodyError::TokenExchange {
                status: Some(response.status),
                message: excerpt(&response.body),
            });
        }

        let parsed: TokenExchangeResponse = serde_json::from_slice(&response.body).map_err(|e| {
            CustodyError::token_exchange(format!("malformed exchange response: {e}"))
        })?;
        let token = parsed.into_token()?;
        info!(token_path = %self.token_path, "access token obtained");
        Ok(token)
    }
}

fn excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    text.chars().take(ERROR_BODY_LIMIT).collect()
}
