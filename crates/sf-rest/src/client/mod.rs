//! Salesforce REST API client.
//!
//! This client wraps `SalesforceClient` from `sf-client` and provides
//! typed methods for sObject CRUD, SOQL query and SOSL search.

use sforce_lite_auth::{AuthConfig, Credentials};
use sforce_lite_client::{ClientConfig, SalesforceClient};
use tracing::instrument;

use crate::error::Result;

mod crud;
mod query;
mod search;

/// Salesforce REST API client bound to one session.
///
/// Every request carries `Authorization: Bearer <token>` and goes to
/// `{instance_url}/services/data/v{version}/...`. A 404 answer is never an
/// error: lookups resolve to `None`, listings to an empty `Vec`, and
/// writes to a no-op.
///
/// # Example
///
/// ```rust,ignore
/// use sforce_lite_auth::AuthConfig;
/// use sforce_lite_rest::{Record, SalesforceRestClient};
/// use serde_json::json;
///
/// let client = SalesforceRestClient::login(&AuthConfig::from_env()?).await?;
///
/// // Query
/// let leads: Vec<Record> = client.query("SELECT Id, Name FROM Lead").await?;
///
/// // Create
/// let id = client.create("Lead", &json!({"LastName": "Smith", "Company": "Acme"})).await?;
///
/// // Update
/// client.update("Lead", &id, &json!({"Company": "Acme Corp"})).await?;
///
/// // Delete
/// client.delete("Lead", &id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct SalesforceRestClient {
    client: SalesforceClient,
}

impl SalesforceRestClient {
    /// Log in with the username/password flow and bind a client to the
    /// resulting session. The config's user agent is used for API calls too.
    #[instrument(skip(config), fields(username = %config.username()))]
    pub async fn login(config: &AuthConfig) -> Result<Self> {
        let session = sforce_lite_auth::login(config).await?;
        let http_config = ClientConfig::builder()
            .with_user_agent(config.user_agent())
            .build();
        Self::with_config(&session, http_config)
    }

    /// Create a client from an existing session.
    pub fn from_session<C: Credentials + ?Sized>(session: &C) -> Result<Self> {
        Self::with_config(session, ClientConfig::default())
    }

    /// Create a client from an existing session with custom HTTP configuration.
    pub fn with_config<C: Credentials + ?Sized>(session: &C, config: ClientConfig) -> Result<Self> {
        let client =
            SalesforceClient::with_config(session.instance_url(), session.access_token(), config)?
                .with_api_version(session.api_version());
        Ok(Self { client })
    }

    /// Create a REST client from an existing SalesforceClient.
    pub fn from_client(client: SalesforceClient) -> Self {
        Self { client }
    }

    /// Get the underlying SalesforceClient.
    pub fn inner(&self) -> &SalesforceClient {
        &self.client
    }

    /// Get the instance URL.
    pub fn instance_url(&self) -> &str {
        self.client.instance_url()
    }

    /// Get the API version.
    pub fn api_version(&self) -> &str {
        self.client.api_version()
    }
}
