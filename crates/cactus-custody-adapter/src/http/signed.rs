/*
[INPUT]:  Logical requests and a key-pair credential
[OUTPUT]: Individually signed HTTP requests and raw response bodies
[POS]:    HTTP layer - per-request signing authentication scheme
[UPDATE]: When the signed header set or canonical layout changes
*/

use std::collections::BTreeMap;
use std::sync::Arc;

use bytes::Bytes;
use tracing::debug;

use crate::auth::canonical::{JSON_MEDIA_TYPE, body_hash, build_canonical_string};
use crate::auth::{
    Freshness, KeyPairCredential, SystemFreshness, authorization_header, encode_display_params,
};
use crate::http::{CustodyError, HttpSend, Result, SignableRequest, TransportRequest};

pub const HEADER_ACCEPT: &str = "Accept";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const HEADER_API_KEY: &str = "x-api-key";
pub const HEADER_API_NONCE: &str = "x-api-nonce";
pub const HEADER_CONTENT_SHA256: &str = "Content-SHA256";
pub const HEADER_DATE: &str = "Date";
pub const HEADER_AUTHORIZATION: &str = "Authorization";

/// Signed request together with the exact string its signature covers
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub canonical: String,
    pub request: TransportRequest,
}

/// Client that signs every request with the credential's private key.
///
/// Each signature covers a fresh nonce and timestamp, so nothing is retried:
/// signing or transport failures are returned to the caller as-is.
#[derive(Debug, Clone)]
pub struct SignedRequestClient {
    base_url: String,
    credential: KeyPairCredential,
    transport: Arc<dyn HttpSend>,
    freshness: Arc<dyn Freshness>,
}

impl SignedRequestClient {
    pub fn new(
        base_url: impl Into<String>,
        credential: KeyPairCredential,
        transport: Arc<dyn HttpSend>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            credential,
            transport,
            freshness: Arc::new(SystemFreshness),
        }
    }

    /// Replace the timestamp and nonce source
    pub fn with_freshness(mut self, freshness: Arc<dyn Freshness>) -> Self {
        self.freshness = freshness;
        self
    }

    pub fn credential(&self) -> &KeyPairCredential {
        &self.credential
    }

    /// Attach the signed header set to a request without sending it
    pub fn sign(&self, request: &SignableRequest) -> Result<TransportRequest> {
        Ok(self.prepare(request)?.request)
    }

    /// Sign a request and keep the canonical string that was signed
    pub fn prepare(&self, request: &SignableRequest) -> Result<PreparedRequest> {
        let timestamp = self.freshness.timestamp();
        let nonce = self.freshness.nonce()?;
        if nonce.is_empty() {
            return Err(CustodyError::Signing("nonce source returned an empty nonce".to_string()));
        }

        let body = request.signable_body();
        let canonical = build_canonical_string(
            request.method.as_str(),
            body,
            self.credential.api_key(),
            &nonce,
            &request.path,
            &request.encoded_query(),
            &timestamp,
        );
        let signature = self.credential.signer().sign(&canonical)?;

        let mut headers = BTreeMap::new();
        headers.insert(HEADER_ACCEPT.to_string(), JSON_MEDIA_TYPE.to_string());
        headers.insert(HEADER_CONTENT_TYPE.to_string(), JSON_MEDIA_TYPE.to_string());
        headers.insert(HEADER_API_KEY.to_string(), self.credential.api_key().to_string());
        headers.insert(HEADER_API_NONCE.to_string(), nonce);
        if let Some(body) = body {
            headers.insert(HEADER_CONTENT_SHA256.to_string(), body_hash(body));
        }
        headers.insert(HEADER_DATE.to_string(), timestamp);
        headers.insert(
            HEADER_AUTHORIZATION.to_string(),
            authorization_header(&signature, self.credential.key_id()),
        );

        Ok(PreparedRequest {
            canonical,
            request: TransportRequest {
                method: request.method.clone(),
                url: request.url(&self.base_url),
                headers,
                body: request.payload().map(<[u8]>::to_vec),
            },
        })
    }

    /// Sign and send a request, returning the raw response body
    pub async fn execute(&self, request: &SignableRequest) -> Result<Bytes> {
        let signed = self.sign(request)?;
        debug!(
            method = %request.method,
            path = %request.path,
            params = %encode_display_params(&request.query),
            nonce = signed.headers.get(HEADER_API_NONCE).map(String::as_str).unwrap_or_default(),
            "sending signed request"
        );

        let response = self.transport.send(signed).await?;
        debug!(status = %response.status, path = %request.path, "signed request completed");
        Ok(response.body)
    }
}
