//! Session-bound Salesforce client with typed HTTP methods.
//!
//! `SalesforceClient` pairs an [`SfHttpClient`] with an instance URL, a
//! bearer token and an API version, and exposes JSON helpers that follow
//! the status policy: 2xx bodies are deserialized, 404 and empty bodies
//! come back as `None`, everything else is an error.
//!
//! ## Security
//!
//! - Access tokens are redacted in Debug output
//! - Request bodies are skipped in tracing spans

use serde::{de::DeserializeOwned, Serialize};
use tracing::instrument;

use crate::client::SfHttpClient;
use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::RequestBuilder;
use crate::DEFAULT_API_VERSION;

/// High-level Salesforce API client bound to one session.
///
/// Cloning is cheap and clones share the underlying connection pool. The
/// session fields never change after construction, so a client can be
/// shared freely between tasks.
///
/// # Example
///
/// ```rust,ignore
/// use sforce_lite_client::SalesforceClient;
///
/// let client = SalesforceClient::new("https://na1.salesforce.com", token)?;
/// let account: Option<serde_json::Value> = client
///     .get_json_opt(&client.rest_url("sobjects/Account/001xx000003DGb2AAG"))
///     .await?;
/// ```
#[derive(Clone)]
pub struct SalesforceClient {
    http: SfHttpClient,
    instance_url: String,
    access_token: String,
    api_version: String,
}

impl std::fmt::Debug for SalesforceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesforceClient")
            .field("instance_url", &self.instance_url)
            .field("access_token", &"[REDACTED]")
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl SalesforceClient {
    /// Create a new Salesforce client with the given instance URL and access token.
    pub fn new(instance_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(instance_url, access_token, ClientConfig::default())
    }

    /// Create a new Salesforce client with custom configuration.
    pub fn with_config(
        instance_url: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let instance_url = instance_url.into().trim_end_matches('/').to_string();
        let parsed = url::Url::parse(&instance_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::new(ErrorKind::InvalidUrl(format!(
                "instance URL must be http(s): {instance_url}"
            ))));
        }

        let http = SfHttpClient::new(config)?;
        Ok(Self {
            http,
            instance_url,
            access_token: access_token.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
        })
    }

    /// Set the API version, e.g. `"62.0"`. A leading `v` is accepted.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = normalize_api_version(&version.into());
        self
    }

    /// Get the instance URL.
    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    /// Get the access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Get the API version.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Get the underlying HTTP client.
    pub fn http(&self) -> &SfHttpClient {
        &self.http
    }

    /// Build the REST API URL for a path.
    ///
    /// Example: `rest_url("sobjects/Account")` -> `{instance}/services/data/v62.0/sobjects/Account`
    pub fn rest_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!(
            "{}/services/data/v{}/{}",
            self.instance_url, self.api_version, path
        )
    }

    // =========================================================================
    // Base HTTP Methods (with authentication)
    // =========================================================================

    /// Create a GET request builder with authentication.
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.http.get(url).bearer_auth(&self.access_token)
    }

    /// Create a POST request builder with authentication.
    pub fn post(&self, url: &str) -> RequestBuilder {
        self.http.post(url).bearer_auth(&self.access_token)
    }

    /// Create a PATCH request builder with authentication.
    pub fn patch(&self, url: &str) -> RequestBuilder {
        self.http.patch(url).bearer_auth(&self.access_token)
    }

    /// Create a DELETE request builder with authentication.
    pub fn delete(&self, url: &str) -> RequestBuilder {
        self.http.delete(url).bearer_auth(&self.access_token)
    }

    /// Execute a request and return the raw response.
    pub async fn execute(&self, request: RequestBuilder) -> Result<crate::Response> {
        self.http.execute(request).await
    }

    // =========================================================================
    // Typed JSON Methods
    // =========================================================================

    /// GET with JSON response; `None` on 404.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get_json_opt<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>> {
        let response = self.execute(self.get(url)).await?;
        response.json_opt().await
    }

    /// GET with query parameters and JSON response; `None` on 404.
    #[instrument(skip(self, params), fields(url = %url))]
    pub async fn get_json_opt_with_query<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<Option<T>> {
        let request = params
            .iter()
            .fold(self.get(url), |req, (name, value)| req.query(*name, *value));
        let response = self.execute(request).await?;
        response.json_opt().await
    }

    /// POST with JSON body; `None` on 404 or an empty body.
    #[instrument(skip(self, body), fields(url = %url))]
    pub async fn post_json_opt<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<Option<T>> {
        let request = self.post(url).json(body)?;
        let response = self.execute(request).await?;
        response.json_opt().await
    }

    /// PATCH with JSON body; `None` on 404 or 204 No Content.
    #[instrument(skip(self, body), fields(url = %url))]
    pub async fn patch_json_opt<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<Option<T>> {
        let request = self.patch(url).json(body)?;
        let response = self.execute(request).await?;
        response.json_opt().await
    }

    /// DELETE request. Returns `false` if the resource was not found.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn delete_request(&self, url: &str) -> Result<bool> {
        let response = self.execute(self.delete(url)).await?;
        Ok(!response.is_not_found())
    }
}

/// Strip a leading `v`/`V` so both `"62.0"` and `"v62.0"` produce `/v62.0/`.
fn normalize_api_version(version: &str) -> String {
    version
        .trim()
        .trim_start_matches(['v', 'V'])
        .to_string()
}
