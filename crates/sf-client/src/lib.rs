//! # sf-client
//!
//! HTTP plumbing for the Salesforce REST API.
//!
//! This crate provides:
//! - A request builder with bearer auth, query parameters, JSON and form bodies
//! - A single round-trip executor with request/response tracing
//! - The status policy shared by every call: 2xx and 404 succeed, anything
//!   else becomes an [`ErrorKind::Api`] carrying the status and body
//! - A session-bound [`SalesforceClient`] with typed JSON helpers
//!
//! There is deliberately no retry, rate limiting or token refresh.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    sf-rest / sf-auth                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   SalesforceClient                          │
//! │  - Instance URL, bearer token, API version                  │
//! │  - Typed JSON methods (get_json_opt, patch_json_opt, ...)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SfHttpClient                             │
//! │  - One request, one response                                │
//! │  - Status policy                                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;
mod salesforce_client;

pub use client::SfHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use request::{RequestBody, RequestBuilder, RequestMethod};
pub use response::{
    is_accepted_status, is_success_status, sanitize_error_message, ApiFailure, Response,
    SalesforceErrorResponse,
};
pub use salesforce_client::SalesforceClient;

/// Default Salesforce API version
pub const DEFAULT_API_VERSION: &str = "62.0";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("sforce-lite/", env!("CARGO_PKG_VERSION"));
