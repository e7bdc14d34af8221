//! Dynamic sObject records.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;

/// An sObject as an arbitrary field map.
pub type Record = serde_json::Map<String, Value>;

/// Key Salesforce adds to every query and search row (`type` and `url`).
pub const ATTRIBUTES_KEY: &str = "attributes";

/// Remove the top-level `attributes` entry from a record.
pub fn strip_attributes(mut record: Value) -> Value {
    if let Value::Object(ref mut fields) = record {
        fields.remove(ATTRIBUTES_KEY);
    }
    record
}

/// Strip `attributes` from every row and deserialize into `T`.
pub(crate) fn into_records<T: DeserializeOwned>(rows: Vec<Value>) -> Result<Vec<T>> {
    rows.into_iter()
        .map(|row| serde_json::from_value(strip_attributes(row)).map_err(Into::into))
        .collect()
}
