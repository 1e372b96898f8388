/*
[INPUT]:  API key, key id, PEM private key or refresh token
[OUTPUT]: Immutable credential for one of the two authentication schemes
[POS]:    Auth layer - credential model shared by the client variants
[UPDATE]: When adding an authentication scheme or key format
*/

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::auth::EcdsaSigner;
use crate::http::{CustodyError, Result};

/// Credential used to authenticate against the custody API
#[derive(Debug, Clone)]
pub enum Credential {
    /// Per-request ECDSA signing
    KeyPair(KeyPairCredential),
    /// Bearer access tokens obtained from a refresh token
    RefreshToken(RefreshTokenCredential),
}

impl Credential {
    /// Short scheme name used in logs
    pub fn scheme(&self) -> &'static str {
        match self {
            Credential::KeyPair(_) => "key_pair",
            Credential::RefreshToken(_) => "refresh_token",
        }
    }
}

impl From<KeyPairCredential> for Credential {
    fn from(value: KeyPairCredential) -> Self {
        Credential::KeyPair(value)
    }
}

impl From<RefreshTokenCredential> for Credential {
    fn from(value: RefreshTokenCredential) -> Self {
        Credential::RefreshToken(value)
    }
}

/// Key id, API key and private key for request signing
#[derive(Debug, Clone)]
pub struct KeyPairCredential {
    key_id: String,
    api_key: String,
    signer: Arc<EcdsaSigner>,
}

impl KeyPairCredential {
    pub fn new(key_id: impl Into<String>, api_key: impl Into<String>, signer: EcdsaSigner) -> Self {
        Self {
            key_id: key_id.into(),
            api_key: api_key.into(),
            signer: Arc::new(signer),
        }
    }

    /// Build from PEM text (PKCS#8 or SEC1)
    pub fn from_pem(
        key_id: impl Into<String>,
        api_key: impl Into<String>,
        pem: &str,
    ) -> Result<Self> {
        Ok(Self::new(key_id, api_key, EcdsaSigner::from_pem(pem)?))
    }

    /// Build from a PEM file on disk
    pub fn from_pem_file(
        key_id: impl Into<String>,
        api_key: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let pem = fs::read_to_string(path).map_err(|e| {
            CustodyError::InvalidKey(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_pem(key_id, api_key, &pem)
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn signer(&self) -> &EcdsaSigner {
        &self.signer
    }
}

/// Long-lived refresh token exchanged for access tokens
#[derive(Clone)]
pub struct RefreshTokenCredential {
    token: Arc<str>,
}

impl RefreshTokenCredential {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(CustodyError::Config("refresh token must not be empty".to_string()));
        }
        Ok(Self {
            token: Arc::from(token),
        })
    }

    /// Raw token value, only for building the exchange body
    pub fn expose(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for RefreshTokenCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefreshTokenCredential")
            .field("token", &"<redacted>")
            .finish()
    }
}
