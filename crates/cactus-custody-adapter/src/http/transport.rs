/*
[INPUT]:  Fully assembled requests (method, URL, headers, body)
[OUTPUT]: Status code and raw response bytes
[POS]:    HTTP layer - opaque transport boundary used by both auth schemes
[UPDATE]: When adding transport backends or changing the send contract
*/

use std::collections::BTreeMap;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Method, StatusCode};

use crate::http::{ClientConfig, Result};

/// Request handed to the transport, already authenticated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<Vec<u8>>,
}

/// Raw transport response
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Sends HTTP requests on behalf of the clients.
///
/// Implementations report connection-level failures as errors and return any
/// HTTP status, including 4xx and 5xx, as a normal response.
#[async_trait]
pub trait HttpSend: Send + Sync + std::fmt::Debug {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse>;
}

/// Transport backed by a reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Reuse an existing reqwest client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        let mut builder = self.client.request(request.method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        Ok(TransportResponse { status, body })
    }
}
