/*
[INPUT]:  HTTP configuration (base URL, timeouts, token path) and a credential
[OUTPUT]: Configured client that authenticates with the credential's scheme
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use reqwest::Url;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::Credential;
use crate::http::{
    CustodyError, HttpSend, ReqwestTransport, Result, SignableRequest, SignedRequestClient,
    TokenClient,
};
use crate::types::ApiEnvelope;

/// Production base URL for the custody API
pub const DEFAULT_BASE_URL: &str = "https://api.mycactus.com";

/// Default path of the refresh-token exchange endpoint
pub const DEFAULT_TOKEN_PATH: &str = "/tokens";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub token_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            token_path: DEFAULT_TOKEN_PATH.to_string(),
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at another host
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Validated base URL without a trailing slash
    fn normalized_base_url(&self) -> Result<String> {
        let url = Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CustodyError::Config(format!(
                "base URL must be http or https, got {}",
                url.scheme()
            )));
        }
        Ok(self.base_url.trim_end_matches('/').to_string())
    }
}

/// Authentication scheme selected from the credential
#[derive(Debug, Clone)]
pub enum Authenticator {
    Signed(SignedRequestClient),
    Token(TokenClient),
}

/// Main HTTP client for the custody API
#[derive(Debug, Clone)]
pub struct CustodyClient {
    config: ClientConfig,
    authenticator: Authenticator,
}

impl CustodyClient {
    /// Create a client that talks over reqwest
    pub fn new(config: ClientConfig, credential: impl Into<Credential>) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::new(&config)?);
        Self::with_transport(config, credential, transport)
    }

    /// Create a client on top of a caller-supplied transport
    pub fn with_transport(
        config: ClientConfig,
        credential: impl Into<Credential>,
        transport: Arc<dyn HttpSend>,
    ) -> Result<Self> {
        let base_url = config.normalized_base_url()?;
        let credential = credential.into();
        debug!(base_url = %base_url, scheme = credential.scheme(), "creating custody client");

        let authenticator = match credential {
            Credential::KeyPair(key_pair) => {
                Authenticator::Signed(SignedRequestClient::new(base_url, key_pair, transport))
            }
            Credential::RefreshToken(refresh) => Authenticator::Token(TokenClient::new(
                base_url,
                config.token_path.clone(),
                refresh,
                transport,
            )),
        };

        Ok(Self {
            config,
            authenticator,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }

    /// Send a logical request through the active scheme
    pub async fn execute(&self, request: &SignableRequest) -> Result<Bytes> {
        match &self.authenticator {
            Authenticator::Signed(client) => client.execute(request).await,
            Authenticator::Token(client) => client.execute(request).await,
        }
    }

    /// GET returning the raw response body
    pub async fn get(&self, path: &str, params: BTreeMap<String, String>) -> Result<Bytes> {
        self.execute(&SignableRequest::get(path, params)).await
    }

    /// POST a JSON body returning the raw response body
    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Bytes> {
        self.execute(&SignableRequest::post_json(path, body)?).await
    }

    /// GET and decode the JSON response
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: BTreeMap<String, String>,
    ) -> Result<T> {
        let body = self.get(path, params).await?;
        decode(&body)
    }

    /// POST a JSON body and decode the JSON response
    pub async fn post_json_typed<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.post_json(path, body).await?;
        decode(&body)
    }

    /// Send any logical request and decode the JSON response
    pub async fn execute_json<T: DeserializeOwned>(&self, request: &SignableRequest) -> Result<T> {
        let body = self.execute(request).await?;
        decode(&body)
    }

    /// Send a request and unwrap the `data` of the custody envelope
    pub(crate) async fn enveloped<T: DeserializeOwned>(
        &self,
        request: &SignableRequest,
    ) -> Result<T> {
        let envelope: ApiEnvelope<T> = self.execute_json(request).await?;
        envelope.into_data()
    }

    /// Send a request whose envelope carries no payload
    pub(crate) async fn acknowledged(&self, request: &SignableRequest) -> Result<()> {
        let envelope: ApiEnvelope<serde_json::Value> = self.execute_json(request).await?;
        envelope.into_ack()
    }
}

/// Query parameters from key/value pairs, dropping empty values
pub(crate) fn optional_params<'a>(
    pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> BTreeMap<String, String> {
    pairs
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Decode a response body, reporting shape mismatches as invalid responses
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| CustodyError::InvalidResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{EcdsaSigner, KeyPairCredential, RefreshTokenCredential};

    fn key_pair() -> KeyPairCredential {
        KeyPairCredential::new("key-id", "api-key", EcdsaSigner::generate())
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.token_path, "/tokens");
    }

    #[test]
    fn test_scheme_follows_credential() {
        let signed = CustodyClient::new(ClientConfig::default(), key_pair()).unwrap();
        assert!(matches!(signed.authenticator(), Authenticator::Signed(_)));

        let refresh = RefreshTokenCredential::new("refresh").unwrap();
        let token = CustodyClient::new(ClientConfig::default(), refresh).unwrap();
        assert!(matches!(token.authenticator(), Authenticator::Token(_)));
    }

    #[test]
    fn test_invalid_base_url() {
        let err =
            CustodyClient::new(ClientConfig::with_base_url("not a url"), key_pair()).unwrap_err();
        assert!(matches!(err, CustodyError::UrlParse(_)));

        let err =
            CustodyClient::new(ClientConfig::with_base_url("ftp://host"), key_pair()).unwrap_err();
        assert!(matches!(err, CustodyError::Config(_)));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ClientConfig::with_base_url("https://api.example.com/");
        assert_eq!(config.normalized_base_url().unwrap(), "https://api.example.com");
    }

    #[test]
    fn test_decode_reports_invalid_response() {
        let err = decode::<Vec<String>>(b"not json").unwrap_err();
        assert!(matches!(err, CustodyError::InvalidResponse(_)));
    }

    #[test]
    fn test_empty_filters_are_not_sent() {
        let params = optional_params([("cactus_symbol", ""), ("symbol", "USDT")]);
        assert_eq!(params.len(), 1);
        assert_eq!(params["symbol"], "USDT");
    }
}
