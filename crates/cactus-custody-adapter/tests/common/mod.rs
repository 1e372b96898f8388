/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for cactus-custody-adapter tests

#![allow(dead_code)]

use std::path::PathBuf;

use p256::SecretKey;
use p256::pkcs8::{EncodePrivateKey, LineEnding};
use rand::rngs::OsRng;
use wiremock::MockServer;

use cactus_custody_adapter::{ClientConfig, KeyPairCredential, RefreshTokenCredential};

pub const TEST_KEY_ID: &str = "test-key-id";
pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_REFRESH_TOKEN: &str = "test-refresh-token";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client configuration pointed at the mock server
pub fn mock_config(server: &MockServer) -> ClientConfig {
    ClientConfig::with_base_url(server.uri())
}

/// Fresh P-256 private key as PKCS#8 PEM
pub fn generate_pem() -> String {
    let secret = SecretKey::random(&mut OsRng);
    secret
        .to_pkcs8_pem(LineEnding::LF)
        .expect("encode test key")
        .to_string()
}

/// Write a PEM key under the system temp dir
pub fn write_temp_pem(pem: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("cactus-test-{}.pem", uuid::Uuid::new_v4()));
    std::fs::write(&path, pem).expect("write test key");
    path
}

pub fn key_pair_credential() -> KeyPairCredential {
    KeyPairCredential::from_pem(TEST_KEY_ID, TEST_API_KEY, &generate_pem()).expect("load test key")
}

pub fn refresh_credential() -> RefreshTokenCredential {
    RefreshTokenCredential::new(TEST_REFRESH_TOKEN).expect("refresh credential")
}

/// Envelope body the custody endpoints answer with
pub fn envelope(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "code": 200,
        "message": "ok",
        "successful": true,
        "data": data,
    })
}
