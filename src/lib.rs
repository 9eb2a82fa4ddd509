//! # testament-client - typed REST client for the Testament core service
//!
//! A Rust client for the namespaces, applications, environments and
//! blueprints exposed by the Testament core service. Every call turns typed
//! inputs into an HTTP request and turns the answer into a uniform
//! [`Envelope`] of status, headers and body.
//!
//! ## Features
//!
//! - One async method per remote operation, grouped by resource family
//! - Strict path templating: a missing path parameter fails before anything is sent
//! - Date reconstitution: ISO-8601 strings anywhere in a response body come
//!   back as dates
//! - Structured errors that separate "the service said no"
//!   ([`ClientError::Status`], with the full response) from "the service could
//!   not be reached" ([`ClientError::Transport`])
//! - Pluggable [`Transport`], with a pooled reqwest implementation by default
//!
//! ## Basic Usage
//!
//! ```no_run
//! use testament_client::{RequestOptions, TestamentClient};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TestamentClient::new("http://localhost:8081")?;
//!
//!     let options = RequestOptions::new().with_header("X-User-Id", "u1");
//!     let dto = json!({"name": "Namespace 1", "members": [{"userId": "u1"}]});
//!     let created = client.create_namespace(&dto, &options).await?;
//!
//!     println!("status {}", created.status);
//!     if let Some(time) = created.get_date("metadata/creator/timeCreated") {
//!         println!("created at {time}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```no_run
//! use testament_client::{ClientError, RequestOptions, TestamentClient};
//!
//! # async fn run(client: TestamentClient) {
//! match client.get_namespace("n1", &RequestOptions::default()).await {
//!     Ok(envelope) => println!("{:?}", envelope.body),
//!     Err(err) if err.is_not_found() => println!("no such namespace"),
//!     Err(ClientError::Transport { message, .. }) => println!("unreachable: {message}"),
//!     Err(other) => println!("failed: {other}"),
//! }
//! # }
//! ```

pub mod api;
pub mod client;
pub mod document;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod page;
pub mod request;
pub mod response;
pub mod rest;
pub mod time;
pub mod transport;

// Re-export main types for convenience
pub use client::Config;
pub use document::Document;
pub use error::{ClientError, Result};
pub use models::*;
pub use page::{Page, Sort};
pub use request::{
    build, Headers, HttpMethod, Operation, QueryParams, RequestOptions, ResolvedRequest,
};
pub use response::{normalize, Envelope};
pub use rest::TestamentClient;
pub use time::Time;
pub use transport::{RawResponse, ReqwestTransport, Transport, TransportFailure};

// Re-export serde_json for convenience
pub use serde_json::json;
