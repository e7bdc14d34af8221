//! # sf-rest
//!
//! Salesforce REST API client: sObject CRUD, SOQL query and SOSL search.
//!
//! ## Features
//!
//! - **SObject CRUD** - Get, create, update, upsert by external id, delete
//! - **SOQL Query** - First batch of a query, `attributes` stripped
//! - **SOSL Search** - Raw SOSL and parameterized search
//!
//! A 404 from any resource endpoint is treated as absent rather than
//! failed. Every other non-2xx status is an [`ErrorKind::Api`] error.
//!
//! ## Example
//!
//! ```rust,ignore
//! use sforce_lite_auth::AuthConfig;
//! use sforce_lite_rest::{Record, SalesforceRestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sforce_lite_rest::Error> {
//!     let config = AuthConfig::new("consumer_key", "consumer_secret", "user@example.com", "password")
//!         .with_security_token("token");
//!     let client = SalesforceRestClient::login(&config).await?;
//!
//!     // Query
//!     let leads: Vec<Record> = client
//!         .query("SELECT Id, Name FROM Lead LIMIT 10")
//!         .await?;
//!
//!     // Create
//!     let id = client
//!         .create("Lead", &serde_json::json!({"LastName": "Smith", "Company": "Acme"}))
//!         .await?;
//!
//!     // Update
//!     client
//!         .update("Lead", &id, &serde_json::json!({"Company": "Acme Corp"}))
//!         .await?;
//!
//!     // Delete
//!     client.delete("Lead", &id).await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod query;
mod record;
mod search;
mod sobject;
mod validation;

// Main client
pub use client::SalesforceRestClient;

// Error types
pub use error::{Error, ErrorKind, Result};

// Record helpers
pub use record::{strip_attributes, Record, ATTRIBUTES_KEY};

// Write results
pub use sobject::{CreateResult, SalesforceError, UpsertResult};

pub use validation::is_safe_name;
