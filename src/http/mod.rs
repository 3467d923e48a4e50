//! HTTP request construction, execution, and payload decoding

pub mod client;
pub mod payload;

use std::fmt::{self, Display};

use serde_json::Value;

pub use client::ApiClient;
pub use payload::Payload;

/// HTTP methods used by the backend contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        write!(f, "{label}")
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A single request and the status it is expected to produce
///
/// Built per scenario invocation and consumed immediately by the client.
/// GET and DELETE never carry a body; the constructors enforce this.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: Method,
    /// Path relative to the `/api` prefix; empty addresses the API root
    pub path: String,
    pub expected_status: u16,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl RequestSpec {
    fn new(method: Method, path: impl Into<String>, expected_status: u16, body: Option<Value>) -> Self {
        Self {
            method,
            path: path.into(),
            expected_status,
            body,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
        }
    }

    pub fn get(path: impl Into<String>, expected_status: u16) -> Self {
        Self::new(Method::Get, path, expected_status, None)
    }

    pub fn post(path: impl Into<String>, expected_status: u16, body: Value) -> Self {
        Self::new(Method::Post, path, expected_status, Some(body))
    }

    pub fn put(path: impl Into<String>, expected_status: u16, body: Value) -> Self {
        Self::new(Method::Put, path, expected_status, Some(body))
    }

    pub fn delete(path: impl Into<String>, expected_status: u16) -> Self {
        Self::new(Method::Delete, path, expected_status, None)
    }
}
