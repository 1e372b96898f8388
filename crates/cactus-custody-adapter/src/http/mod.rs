/*
[INPUT]:  HTTP client configuration, credentials and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod address;
pub mod asset;
pub mod bearer;
pub mod client;
pub mod defi;
pub mod error;
pub mod order;
pub mod request;
pub mod signed;
pub mod transport;
pub mod txhistory;
pub mod wallet;
pub mod withdrawal;

pub use error::{CustodyError, Result};
pub use request::SignableRequest;
pub use transport::{HttpSend, ReqwestTransport, TransportRequest, TransportResponse};

pub use bearer::TokenClient;
pub use client::{Authenticator, ClientConfig, CustodyClient};
pub use signed::{PreparedRequest, SignedRequestClient};
