//! SOQL query response shape.

use serde::Deserialize;
use serde_json::Value;

/// Body of `GET /query`. Only the first batch is returned to callers.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct QueryResponse {
    #[serde(default)]
    pub records: Vec<Value>,
}
