//! # sforce-lite
//!
//! A thin Salesforce REST API client for Rust.
//!
//! Log in once with the OAuth 2.0 username/password flow, then read and
//! write sObjects, run SOQL queries and SOSL searches against the
//! authenticated instance.
//!
//! ## Security
//!
//! - Sensitive data (tokens, secrets) are redacted in Debug output
//! - Tracing/logging skips credential parameters
//! - Error messages sanitize any credential data
//!
//! ## Crates
//!
//! - **sforce-lite-client** - HTTP plumbing: request builder, status policy, session-bound client
//! - **sforce-lite-auth** - Login: `AuthConfig`, `Session`, username/password flow
//! - **sforce-lite-rest** - REST API: get, create, update, upsert, delete, query, search
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sforce_lite::{AuthConfig, Record, SalesforceRestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // SF_CONSUMER_KEY, SF_CONSUMER_SECRET, SF_USERNAME, SF_PASSWORD, ...
//!     let config = AuthConfig::from_env()?;
//!     let client = SalesforceRestClient::login(&config).await?;
//!
//!     let leads: Vec<Record> = client
//!         .query("SELECT Id, Name FROM Lead LIMIT 10")
//!         .await?;
//!
//!     for lead in leads {
//!         println!("{}", lead["Name"]);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "auth")]
pub use sforce_lite_auth as auth;
#[cfg(feature = "client")]
pub use sforce_lite_client as client;
#[cfg(feature = "rest")]
pub use sforce_lite_rest as rest;

// Re-export commonly used types at the top level
#[cfg(feature = "auth")]
pub use sforce_lite_auth::{login, AuthConfig, Credentials, Session};
#[cfg(feature = "client")]
pub use sforce_lite_client::{ClientConfig, SalesforceClient};
#[cfg(feature = "rest")]
pub use sforce_lite_rest::{Record, SalesforceRestClient};
