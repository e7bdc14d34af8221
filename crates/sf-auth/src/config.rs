//! Login configuration for the username/password OAuth flow.
//!
//! Sensitive fields (consumer secret, password, security token) are
//! redacted in Debug output.

use crate::error::{Error, ErrorKind, Result};
use crate::PRODUCTION_LOGIN_URL;

/// Everything needed to exchange user credentials for a [`Session`](crate::Session).
#[derive(Clone)]
pub struct AuthConfig {
    login_host: String,
    api_version: String,
    consumer_key: String,
    consumer_secret: String,
    username: String,
    password: String,
    security_token: String,
    user_agent: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("login_host", &self.login_host)
            .field("api_version", &self.api_version)
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[REDACTED]")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("security_token", &"[REDACTED]")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl AuthConfig {
    /// Create a config for the production login host with no security token.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            login_host: PRODUCTION_LOGIN_URL.to_string(),
            api_version: sforce_lite_client::DEFAULT_API_VERSION.to_string(),
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            username: username.into(),
            password: password.into(),
            security_token: String::new(),
            user_agent: sforce_lite_client::USER_AGENT.to_string(),
        }
    }

    /// Set the login host, e.g. [`SANDBOX_LOGIN_URL`](crate::SANDBOX_LOGIN_URL).
    pub fn with_login_host(mut self, login_host: impl Into<String>) -> Self {
        self.login_host = login_host.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the REST API version used by the resulting session.
    ///
    /// Request paths always carry a `v` prefix (`/services/data/v62.0/`),
    /// so `"62.0"` and `"v62.0"` are equivalent.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Set the user's security token, appended to the password on login.
    pub fn with_security_token(mut self, security_token: impl Into<String>) -> Self {
        self.security_token = security_token.into();
        self
    }

    /// Set the User-Agent sent on login and on every API call.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Load a config from environment variables.
    ///
    /// Required (each also accepted with a `SALESFORCE_` prefix instead of `SF_`):
    /// - `SF_CONSUMER_KEY`
    /// - `SF_CONSUMER_SECRET`
    /// - `SF_USERNAME`
    /// - `SF_PASSWORD`
    ///
    /// Optional:
    /// - `SF_SECURITY_TOKEN`
    /// - `SF_LOGIN_URL` (default: production)
    /// - `SF_API_VERSION` (default: "62.0")
    /// - `SF_USER_AGENT`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |suffix: &str| {
            lookup(&format!("SF_{suffix}")).or_else(|| lookup(&format!("SALESFORCE_{suffix}")))
        };
        let required = |suffix: &str| {
            var(suffix).ok_or_else(|| Error::new(ErrorKind::EnvVar(format!("SF_{suffix}"))))
        };

        let mut config = Self::new(
            required("CONSUMER_KEY")?,
            required("CONSUMER_SECRET")?,
            required("USERNAME")?,
            required("PASSWORD")?,
        );

        if let Some(token) = var("SECURITY_TOKEN") {
            config = config.with_security_token(token);
        }
        if let Some(host) = var("LOGIN_URL") {
            config = config.with_login_host(host);
        }
        if let Some(version) = var("API_VERSION") {
            config = config.with_api_version(version);
        }
        if let Some(agent) = var("USER_AGENT") {
            config = config.with_user_agent(agent);
        }

        Ok(config)
    }

    /// Check the config is usable before any request is made.
    pub fn validate(&self) -> Result<()> {
        if self.consumer_key.is_empty() {
            return Err(Error::new(ErrorKind::Config(
                "consumer_key is required".to_string(),
            )));
        }
        if self.username.is_empty() {
            return Err(Error::new(ErrorKind::Config(
                "username is required".to_string(),
            )));
        }
        let url = url::Url::parse(&self.login_host)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::new(ErrorKind::Config(format!(
                "login host must be http(s): {}",
                self.login_host
            ))));
        }
        Ok(())
    }

    /// Login host, without trailing slash.
    pub fn login_host(&self) -> &str {
        &self.login_host
    }

    /// OAuth token endpoint on the login host.
    pub fn token_url(&self) -> String {
        format!("{}/services/oauth2/token", self.login_host)
    }

    /// REST API version.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Consumer key (client_id).
    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    /// Username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// User-Agent.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Form fields for the password grant. The password field is the
    /// user's password with the security token appended.
    pub(crate) fn password_grant_form(&self) -> Vec<(&'static str, String)> {
        vec![
            ("grant_type", "password".to_string()),
            ("client_id", self.consumer_key.clone()),
            ("client_secret", self.consumer_secret.clone()),
            ("username", self.username.clone()),
            (
                "password",
                format!("{}{}", self.password, self.security_token),
            ),
        ]
    }
}
