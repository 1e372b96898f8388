/*
[INPUT]:  Credentials, request fields and freshness sources
[OUTPUT]: Canonical strings, signatures, nonces and cached access tokens
[POS]:    Auth layer - handles custody API authentication
[UPDATE]: When auth flow or signature methods change
*/

pub mod canonical;
pub mod credential;
pub mod freshness;
pub mod signer;
pub mod token;

pub use canonical::{build_canonical_string, encode_display_params, encode_query};
pub use credential::{Credential, KeyPairCredential, RefreshTokenCredential};
pub use freshness::{Freshness, SystemFreshness};
pub use signer::{EcdsaSigner, authorization_header};
pub use token::{AccessToken, AccessTokenCache};
