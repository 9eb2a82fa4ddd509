//! Transport layer abstraction for HTTP communication.
//!
//! The client never talks to the network itself: it hands a
//! [`ResolvedRequest`] to a [`Transport`] and gets back either a
//! [`RawResponse`] or a [`TransportFailure`]. The default implementation,
//! [`ReqwestTransport`], wraps a pooled `reqwest::Client`; tests and callers
//! with special needs can supply their own.

use crate::client::{create_rest_client, Config};
use crate::error::Result;
use crate::request::{Headers, ResolvedRequest};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Client;
use thiserror::Error;

/// A response exactly as the transport received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Headers,
    /// Undecoded body bytes
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, headers: Headers, body: impl Into<Vec<u8>>) -> Self {
        RawResponse {
            status,
            headers,
            body: body.into(),
        }
    }
}

/// A failed transport call.
///
/// Failures for non-success statuses carry the response; network-level
/// failures (connection refused, DNS, timeout) carry none.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportFailure {
    pub message: String,
    pub response: Option<RawResponse>,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportFailure {
    /// A failure with no response
    pub fn new(message: impl Into<String>) -> Self {
        TransportFailure {
            message: message.into(),
            response: None,
            source: None,
        }
    }

    /// A failure that still produced a response
    pub fn with_response(message: impl Into<String>, response: RawResponse) -> Self {
        TransportFailure {
            message: message.into(),
            response: Some(response),
            source: None,
        }
    }

    /// Attach the underlying error
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

/// Trait for HTTP transport implementations.
///
/// Implementations must hand back the raw status code, the headers as
/// received and the body without any date reconstitution.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a resolved request.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportFailure`] carrying the response when the service
    /// answered with a non-success status, and one without a response when
    /// nothing was received.
    async fn send(
        &self,
        request: ResolvedRequest,
    ) -> std::result::Result<RawResponse, TransportFailure>;
}

/// Reqwest-based HTTP transport implementation.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with a client built from `config`
    pub fn new(config: &Config) -> Result<Self> {
        Ok(ReqwestTransport {
            client: create_rest_client(config)?,
        })
    }

    /// Wrap a pre-configured reqwest client
    pub fn from_client(client: Client) -> Self {
        ReqwestTransport { client }
    }

    /// Get a reference to the underlying reqwest client
    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(
        &self,
        request: ResolvedRequest,
    ) -> std::result::Result<RawResponse, TransportFailure> {
        let mut builder = self.client.request(request.method.into(), request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(failure)?;
        let status = response.status();
        let headers = collect_headers(response.headers());
        let body = response.bytes().await.map_err(failure)?;

        let raw = RawResponse::new(status.as_u16(), headers, body.to_vec());
        if status.is_success() {
            Ok(raw)
        } else {
            Err(TransportFailure::with_response(
                format!("Request failed with status code {}", status.as_u16()),
                raw,
            ))
        }
    }
}

fn failure(err: reqwest::Error) -> TransportFailure {
    TransportFailure::new(err.to_string()).with_source(err)
}

/// Flatten a header map; repeated headers are joined with ", ".
fn collect_headers(map: &HeaderMap) -> Headers {
    let mut headers = Headers::new();
    for (name, value) in map {
        let value = String::from_utf8_lossy(value.as_bytes());
        headers
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert_with(|| value.into_owned());
    }
    headers
}
