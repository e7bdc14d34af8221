//! Checks applied to caller-supplied names before they reach a URL path.

use std::borrow::Cow;

use crate::error::{Error, ErrorKind, Result};

/// Returns true if `name` is usable as an sObject or field API name.
///
/// API names start with a letter and contain only ASCII letters, digits
/// and underscores, so custom names such as `Invoice__c` pass while
/// anything carrying `/`, `?`, quotes or whitespace does not.
///
/// ```rust
/// use sforce_lite_rest::is_safe_name;
///
/// assert!(is_safe_name("Account"));
/// assert!(is_safe_name("External_Id__c"));
/// assert!(!is_safe_name("Account/../query"));
/// assert!(!is_safe_name("1Account"));
/// ```
#[must_use]
pub fn is_safe_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

pub(crate) fn require_sobject(sobject: &str) -> Result<()> {
    if is_safe_name(sobject) {
        Ok(())
    } else {
        Err(Error::new(ErrorKind::InvalidInput(format!(
            "invalid sObject name: {sobject:?}"
        ))))
    }
}

pub(crate) fn require_field(field: &str) -> Result<()> {
    if is_safe_name(field) {
        Ok(())
    } else {
        Err(Error::new(ErrorKind::InvalidInput(format!(
            "invalid field name: {field:?}"
        ))))
    }
}

/// A record id or external id value must be non-blank, otherwise the path
/// collapses onto the sObject's own resource.
pub(crate) fn require_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        Err(Error::new(ErrorKind::InvalidInput(
            "record id must not be empty".to_string(),
        )))
    } else {
        Ok(())
    }
}

/// Percent-encode a record id or external id value as one path segment.
pub(crate) fn encode_segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}
