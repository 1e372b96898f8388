/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Cactus custody adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    AccessToken,
    AccessTokenCache,
    Credential,
    EcdsaSigner,
    Freshness,
    KeyPairCredential,
    RefreshTokenCredential,
    SystemFreshness,
};

// Re-export commonly used types from http
pub use http::{
    Authenticator,
    ClientConfig,
    CustodyClient,
    CustodyError,
    HttpSend,
    ReqwestTransport,
    Result,
    SignableRequest,
    SignedRequestClient,
    TokenClient,
};

// Re-export all types
pub use types::*;
