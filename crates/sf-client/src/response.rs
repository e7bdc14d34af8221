//! HTTP response handling and the Salesforce status policy.
//!
//! Every response goes through [`Response::check_status`]:
//!
//! | Status        | Outcome                                        |
//! |---------------|------------------------------------------------|
//! | 200..=299     | success                                        |
//! | 404           | success, body treated as absent                |
//! | anything else | [`ErrorKind::Api`] carrying status and body    |

use std::fmt;
use std::sync::LazyLock;

use serde::de::DeserializeOwned;

use crate::error::{Error, ErrorKind, Result};

/// Wrapper around an HTTP response.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        is_success_status(self.status())
    }

    /// Returns true if this is a 404 Not Found response.
    pub fn is_not_found(&self) -> bool {
        self.status() == 404
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Deserialize the response body as JSON.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let body = self.text().await?;
        serde_json::from_str(&body).map_err(Into::into)
    }

    /// Deserialize the response body as JSON, treating 404 and an empty
    /// body (e.g. 204 No Content) as `None`.
    pub async fn json_opt<T: DeserializeOwned>(self) -> Result<Option<T>> {
        if self.is_not_found() {
            return Ok(None);
        }
        let body = self.text().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&body)?))
    }

    /// Apply the status policy: 2xx and 404 pass through, anything else
    /// consumes the body into an [`ErrorKind::Api`] error.
    pub async fn check_status(self) -> Result<Response> {
        let status = self.status();
        if is_accepted_status(status) {
            return Ok(self);
        }

        let body = self.text().await.unwrap_or_default();
        Err(Error::new(ErrorKind::Api(ApiFailure::from_body(status, &body))))
    }
}

/// Returns true for 2xx.
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Returns true for statuses the client resolves rather than rejects.
pub fn is_accepted_status(status: u16) -> bool {
    is_success_status(status) || status == 404
}

/// A rejected response: status, any structured Salesforce errors, and the
/// (sanitized) raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    /// HTTP status code.
    pub status: u16,
    /// Structured errors parsed from the body, empty if it had none.
    pub errors: Vec<SalesforceErrorResponse>,
    /// Response body with tokens and session ids redacted.
    pub body: String,
}

impl ApiFailure {
    /// Build from a raw status and body.
    pub fn from_body(status: u16, body: &str) -> Self {
        let errors = parse_salesforce_errors(body)
            .into_iter()
            .map(|mut e| {
                e.message = sanitize_error_message(&e.message);
                e
            })
            .collect();

        Self {
            status,
            errors,
            body: sanitize_error_message(body),
        }
    }

    /// The first Salesforce error code, e.g. `INVALID_FIELD`.
    pub fn error_code(&self) -> Option<&str> {
        self.errors.first().map(|e| e.error_code.as_str())
    }

    /// The first Salesforce error message, falling back to the body.
    pub fn message(&self) -> &str {
        self.errors
            .first()
            .map(|e| e.message.as_str())
            .unwrap_or(self.body.as_str())
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.first() {
            Some(err) => write!(
                f,
                "HTTP {} {} - {}",
                self.status, err.error_code, err.message
            ),
            None if self.body.is_empty() => write!(f, "HTTP {}", self.status),
            None => write!(f, "HTTP {} {}", self.status, self.body),
        }
    }
}

/// Salesforce REST error entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct SalesforceErrorResponse {
    #[serde(alias = "errorCode")]
    pub error_code: String,
    pub message: String,
    #[serde(default)]
    pub fields: Option<Vec<String>>,
}

/// Salesforce returns errors either as an array or a single object.
fn parse_salesforce_errors(body: &str) -> Vec<SalesforceErrorResponse> {
    if let Ok(errors) = serde_json::from_str::<Vec<SalesforceErrorResponse>>(body) {
        return errors;
    }
    if let Ok(err) = serde_json::from_str::<SalesforceErrorResponse>(body) {
        return vec![err];
    }
    Vec::new()
}

static TOKEN_PATTERN: LazyLock<regex_lite::Regex> = LazyLock::new(|| {
    regex_lite::Regex::new(r"00[A-Za-z0-9]{13,}[!][A-Za-z0-9_.]+").expect("valid token pattern")
});

static SESSION_PATTERN: LazyLock<regex_lite::Regex> = LazyLock::new(|| {
    regex_lite::Regex::new(r"sid=[A-Za-z0-9]{20,}").expect("valid session pattern")
});

/// Sanitize an error message to prevent exposing sensitive data.
///
/// Redacts Salesforce access tokens and session ids, then truncates
/// anything over 500 characters.
pub fn sanitize_error_message(message: &str) -> String {
    const MAX_LENGTH: usize = 500;

    let sanitized = TOKEN_PATTERN.replace_all(message, "[REDACTED_TOKEN]");
    let mut sanitized = SESSION_PATTERN
        .replace_all(&sanitized, "sid=[REDACTED]")
        .into_owned();

    if sanitized.len() > MAX_LENGTH {
        let mut cut = MAX_LENGTH;
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized.truncate(cut);
        sanitized.push_str("...[truncated]");
    }

    sanitized
}
