//! SOSL and parameterized search response shape.

use serde::Deserialize;
use serde_json::Value;

/// Body of `GET /search` and `GET /parameterizedSearch`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(rename = "searchRecords", default)]
    pub search_records: Vec<Value>,
}
