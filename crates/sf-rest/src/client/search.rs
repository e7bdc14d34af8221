//! SOSL and parameterized search.

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::record::into_records;
use crate::search::SearchResponse;

impl super::SalesforceRestClient {
    /// Execute a SOSL search, e.g. `FIND {Acme} IN NAME FIELDS`.
    ///
    /// Records come back with `attributes` removed.
    ///
    /// # Security
    ///
    /// Reserved SOSL characters in user-provided search terms must be
    /// escaped by the caller.
    #[instrument(skip(self))]
    pub async fn search<T: DeserializeOwned>(&self, sosl: &str) -> Result<Vec<T>> {
        self.search_at("search", sosl).await
    }

    /// Execute a parameterized search with a plain search string.
    ///
    /// Records come back with `attributes` removed.
    #[instrument(skip(self))]
    pub async fn parameterized_search<T: DeserializeOwned>(&self, query: &str) -> Result<Vec<T>> {
        self.search_at("parameterizedSearch", query).await
    }

    async fn search_at<T: DeserializeOwned>(&self, resource: &str, q: &str) -> Result<Vec<T>> {
        let url = self.client.rest_url(resource);
        let response: Option<SearchResponse> = self
            .client
            .get_json_opt_with_query(&url, &[("q", q)])
            .await?;

        match response {
            Some(response) => into_records(response.search_records),
            None => {
                debug!(resource, "Search endpoint returned no body");
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::mock_client;
    use crate::record::{Record, ATTRIBUTES_KEY};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn search_body() -> serde_json::Value {
        json!({
            "searchRecords": [
                {"attributes": {"type": "Contact", "url": "/services/data/v62.0/sobjects/Contact/003A"}, "Id": "003A"},
                {"attributes": {"type": "Lead", "url": "/services/data/v62.0/sobjects/Lead/00QA"}, "Id": "00QA"}
            ]
        })
    }

    #[tokio::test]
    async fn test_search() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/services/data/v62.0/search"))
            .and(query_param("q", "FIND {Acme} IN ALL FIELDS"))
            .respond_with(ResponseTemplate::new(200).set_body_json(search_body()))
            .mount(&mock_server)
            .await;

        let client = mock_client(&mock_server.uri());
        let records: Vec<Record> = client.search("FIND {Acme} IN ALL FIELDS").await.unwrap();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| !r.contains_key(ATTRIBUTES_KEY)));
        assert_eq!(records[0]["Id"], "003A");
    }

    #[tokio::test]
    async fn test_parameterized_search() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/services/data/v62.0/parameterizedSearch"))
            .and(query_param("q", "Acme Corp"))
            .respond_with(ResponseTemplate::new(200).set_body_json(search_body()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = mock_client(&mock_server.uri());
        let records: Vec<Record> = client.parameterized_search("Acme Corp").await.unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| !r.contains_key(ATTRIBUTES_KEY)));
    }

    #[tokio::test]
    async fn test_search_not_found_is_empty() {
        let mock_server = MockServer::start().await;

        let client = mock_client(&mock_server.uri());
        let records: Vec<Record> = client.search("FIND {nothing}").await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_search_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&mock_server)
            .await;

        let client = mock_client(&mock_server.uri());
        let err = client
            .parameterized_search::<Record>("Acme")
            .await
            .unwrap_err();
        assert!(err.is_api_error());
        assert_eq!(err.status(), Some(503));
    }
}
