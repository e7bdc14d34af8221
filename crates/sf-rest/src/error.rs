//! Error types for sf-rest.

/// Result type alias for sf-rest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sf-rest operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if login failed.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Auth(_))
    }

    /// Returns true if the API answered with a rejecting status.
    pub fn is_api_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Api { .. })
    }

    /// HTTP status of the rejected call, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            ErrorKind::Api { status, .. } => Some(status),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Login failed.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The API answered with a status outside 2xx that is not 404.
    #[error("{}", api_display(*status, error_code.as_deref(), message))]
    Api {
        status: u16,
        error_code: Option<String>,
        message: String,
        /// Sanitized response body.
        body: String,
    },

    /// HTTP transport or client-side error.
    #[error("Client error: {0}")]
    Client(String),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid sObject or field name.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A create call returned no record id.
    #[error("Response did not contain a record id (HTTP {status})")]
    MissingId { status: u16 },
}

fn api_display(status: u16, error_code: Option<&str>, message: &str) -> String {
    let mut out = format!("Error from Salesforce: HTTP {status}");
    if let Some(code) = error_code {
        out.push(' ');
        out.push_str(code);
    }
    if !message.is_empty() {
        out.push_str(" - ");
        out.push_str(message);
    }
    out
}

impl From<sforce_lite_client::Error> for Error {
    fn from(err: sforce_lite_client::Error) -> Self {
        let kind = match &err.kind {
            sforce_lite_client::ErrorKind::Api(failure) => ErrorKind::Api {
                status: failure.status,
                error_code: failure.error_code().map(str::to_string),
                message: failure.message().to_string(),
                body: failure.body.clone(),
            },
            sforce_lite_client::ErrorKind::Json(msg) => ErrorKind::Json(msg.clone()),
            other => ErrorKind::Client(other.to_string()),
        };
        Error::with_source(kind, err)
    }
}

impl From<sforce_lite_auth::Error> for Error {
    fn from(err: sforce_lite_auth::Error) -> Self {
        Error::with_source(ErrorKind::Auth(err.to_string()), err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}
