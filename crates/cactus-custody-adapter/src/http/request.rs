/*
[INPUT]:  Method, path, query parameters and optional JSON body
[OUTPUT]: Logical request shared by both authentication schemes
[POS]:    HTTP layer - request model before credentials are attached
[UPDATE]: When requests gain new signable fields
*/

use std::collections::BTreeMap;

use reqwest::Method;
use serde::Serialize;

use crate::auth::encode_query;
use crate::http::Result;

/// One logical API call, built fresh for every invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignableRequest {
    pub method: Method,
    pub path: String,
    pub query: BTreeMap<String, String>,
    pub body: Option<Vec<u8>>,
}

impl SignableRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: BTreeMap::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>, query: BTreeMap<String, String>) -> Self {
        Self::new(Method::GET, path).with_query(query)
    }

    /// POST with a JSON-serialized body
    pub fn post_json<B: Serialize + ?Sized>(path: impl Into<String>, body: &B) -> Result<Self> {
        let bytes = serde_json::to_vec(body)?;
        Ok(Self::new(Method::POST, path).with_body(bytes))
    }

    pub fn with_query(mut self, query: BTreeMap<String, String>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Body as it takes part in signing; only POST bodies are hashed
    pub fn signable_body(&self) -> Option<&[u8]> {
        if self.method == Method::POST {
            self.body.as_deref()
        } else {
            None
        }
    }

    /// Body as it goes on the wire; GET never carries one
    pub fn payload(&self) -> Option<&[u8]> {
        if self.method == Method::GET {
            None
        } else {
            self.body.as_deref()
        }
    }

    /// Raw `k=v&k=v` query, empty when there are no parameters
    pub fn encoded_query(&self) -> String {
        encode_query(&self.query)
    }

    /// Full URL with the raw query appended only when non-empty
    pub fn url(&self, base_url: &str) -> String {
        let query = self.encoded_query();
        if query.is_empty() {
            format!("{base_url}{}", self.path)
        } else {
            format!("{base_url}{}?{query}", self.path)
        }
    }
}
