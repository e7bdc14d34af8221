//! SOQL query.

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::query::QueryResponse;
use crate::record::into_records;

impl super::SalesforceRestClient {
    /// Execute a SOQL query and return the records of the first batch,
    /// with `attributes` removed from each.
    ///
    /// # Security
    ///
    /// The query is sent as-is. Quote and escape any user-provided values
    /// placed in the WHERE clause before building the string.
    #[instrument(skip(self))]
    pub async fn query<T: DeserializeOwned>(&self, soql: &str) -> Result<Vec<T>> {
        let url = self.client.rest_url("query");
        let response: Option<QueryResponse> = self
            .client
            .get_json_opt_with_query(&url, &[("q", soql)])
            .await?;

        match response {
            Some(response) => into_records(response.records),
            None => {
                debug!("Query endpoint returned no body");
                Ok(Vec::new())
            }
        }
    }
}
