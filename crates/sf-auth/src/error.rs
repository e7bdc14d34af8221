//! Error types for sf-auth.
//!
//! Error messages are designed to avoid exposing sensitive credential data.

/// Result type alias for sf-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sf-auth operations.
///
/// Error messages are sanitized to prevent accidental credential exposure.
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

    /// Returns true if the token endpoint answered and refused the login,
    /// as opposed to a transport or configuration failure.
    pub fn is_rejected(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::OAuth { .. } | ErrorKind::LoginRejected { .. }
        )
    }

    /// HTTP status of the refused login, if the endpoint answered.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            ErrorKind::OAuth { status, .. } | ErrorKind::LoginRejected { status, .. } => {
                Some(status)
            }
            _ => None,
        }
    }
}

/// The kind of error that occurred.
///
/// Error messages avoid including credential values.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// OAuth error response from the token endpoint.
    #[error("Error logging in to Salesforce: HTTP {status} {error} - {description}")]
    OAuth {
        status: u16,
        error: String,
        description: String,
    },

    /// Token endpoint refused the login with a non-OAuth body.
    #[error("Error logging in to Salesforce: HTTP {status} {body}")]
    LoginRejected { status: u16, body: String },

    /// HTTP transport error during authentication.
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Environment variable not set.
    #[error("Environment variable not set: {0}")]
    EnvVar(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::Config(format!("Invalid URL: {}", err)), err)
    }
}

impl From<sforce_lite_client::Error> for Error {
    fn from(err: sforce_lite_client::Error) -> Self {
        // Sanitize any potential credential exposure
        let message = err.to_string();
        let sanitized = if message.contains("Bearer") || message.contains("token=") {
            "Client error (details redacted for security)".to_string()
        } else {
            message
        };
        let kind = match err.kind {
            sforce_lite_client::ErrorKind::Json(_) => ErrorKind::Json(sanitized),
            sforce_lite_client::ErrorKind::Config(_)
            | sforce_lite_client::ErrorKind::InvalidUrl(_) => ErrorKind::Config(sanitized),
            _ => ErrorKind::Http(sanitized),
        };
        Error::with_source(kind, err)
    }
}
