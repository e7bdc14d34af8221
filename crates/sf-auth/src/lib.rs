//! # sf-auth
//!
//! Salesforce login via the OAuth 2.0 username/password flow.
//!
//! [`PasswordAuth::login`] posts the connected app's consumer key and secret,
//! the username, and the password with the security token appended to the
//! token endpoint, and returns a [`Session`]: instance URL, bearer token and
//! API version. Sessions are never refreshed; log in again when a token
//! expires.
//!
//! ## Security
//!
//! - Secrets and tokens are redacted in Debug output
//! - Tracing spans record the login host and username only
//! - Error messages are sanitized before they carry response bodies
//!
//! ## Example
//!
//! ```rust,ignore
//! use sforce_lite_auth::{AuthConfig, Credentials, PasswordAuth};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sforce_lite_auth::Error> {
//!     let config = AuthConfig::new("consumer_key", "consumer_secret", "user@example.com", "password")
//!         .with_security_token("token");
//!     let session = PasswordAuth::new(config)?.login().await?;
//!     println!("logged in to {}", session.instance_url());
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod password;
mod session;

pub use config::AuthConfig;
pub use error::{Error, ErrorKind, Result};
pub use password::{login, PasswordAuth};
pub use session::{Credentials, Session};

/// Default Salesforce login URL for production.
pub const PRODUCTION_LOGIN_URL: &str = "https://login.salesforce.com";

/// Default Salesforce login URL for sandbox.
pub const SANDBOX_LOGIN_URL: &str = "https://test.salesforce.com";
