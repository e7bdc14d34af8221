//! OAuth 2.0 username/password flow.
//!
//! A single form-encoded POST to `{login_host}/services/oauth2/token`
//! exchanges the connected app's key and secret plus the user's password
//! (with security token appended) for an access token and instance URL.

use serde::Deserialize;
use tracing::{info, instrument, warn};

use sforce_lite_client::{is_success_status, sanitize_error_message, ClientConfig, SfHttpClient};

use crate::config::AuthConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::session::{Credentials, Session, TokenResponse};

/// Authenticator for the username/password OAuth flow.
#[derive(Clone)]
pub struct PasswordAuth {
    config: AuthConfig,
    http_client: SfHttpClient,
}

impl std::fmt::Debug for PasswordAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordAuth")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl PasswordAuth {
    /// Create an authenticator. The config is validated here so a bad
    /// login host fails before any request.
    pub fn new(config: AuthConfig) -> Result<Self> {
        config.validate()?;
        let http_client = SfHttpClient::new(
            ClientConfig::builder()
                .with_user_agent(config.user_agent())
                .build(),
        )?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Get the login config.
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Exchange the configured credentials for a [`Session`].
    ///
    /// Any non-2xx answer from the token endpoint, or a transport failure,
    /// is an error. Credentials are not logged.
    #[instrument(skip(self), fields(login_host = %self.config.login_host(), username = %self.config.username()))]
    pub async fn login(&self) -> Result<Session> {
        let request = self
            .http_client
            .post(self.config.token_url())
            .header("Accept", "application/json")
            .form(self.config.password_grant_form());

        let response = self.http_client.send_raw(request).await?;
        let status = response.status();
        let body = response.text().await?;

        if !is_success_status(status) {
            let err = rejection(status, &body);
            warn!(status, error = %err, "Login rejected");
            return Err(err);
        }

        let token: TokenResponse = serde_json::from_str(&body)?;
        let session = token.into_session(self.config.api_version());
        info!(instance_url = %session.instance_url(), "Logged in");
        Ok(session)
    }
}

/// Log in with the given config. Shorthand for
/// `PasswordAuth::new(config.clone())?.login().await`.
pub async fn login(config: &AuthConfig) -> Result<Session> {
    PasswordAuth::new(config.clone())?.login().await
}

/// OAuth error response.
#[derive(Debug, Deserialize)]
struct OAuthErrorResponse {
    error: String,
    #[serde(default)]
    error_description: String,
}

fn rejection(status: u16, body: &str) -> Error {
    match serde_json::from_str::<OAuthErrorResponse>(body) {
        Ok(oauth) => Error::new(ErrorKind::OAuth {
            status,
            error: oauth.error,
            description: sanitize_error_message(&oauth.error_description),
        }),
        Err(_) => Error::new(ErrorKind::LoginRejected {
            status,
            body: sanitize_error_message(body),
        }),
    }
}
