//! Client error types.

use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Login failed: transport error, non-200 status, or no session cookie.
    #[error("Authentication failed: {}", summary(.status, .body))]
    Auth {
        /// HTTP status code, if a response arrived.
        status: Option<u16>,
        /// Raw response body.
        body: String,
        /// Underlying transport error.
        #[source]
        source: Option<reqwest::Error>,
    },

    /// A GET or POST failed.
    #[error("HTTP error: {}", summary(.status, .body))]
    Http {
        /// HTTP status code, if a response arrived.
        status: Option<u16>,
        /// Raw response body.
        body: String,
        /// Underlying transport error.
        #[source]
        source: Option<reqwest::Error>,
    },

    /// A request that needs a session was made before login.
    #[error("Not logged in: call login() before making authenticated requests")]
    NotLoggedIn,

    /// The service answered with its own error list.
    #[error("Service error: {}", .0.join("; "))]
    Service(Vec<String>),

    /// POST data could not be flattened into form fields.
    #[error("Invalid form data: {0}")]
    InvalidForm(String),

    /// The service returned JSON of an unexpected shape.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading credentials from the console failed.
    #[error("Prompt error: {0}")]
    Prompt(#[from] std::io::Error),
}

fn summary(status: &Option<u16>, body: &str) -> String {
    match status {
        Some(status) if body.is_empty() => format!("status {}", status),
        Some(status) => format!("status {}: {}", status, body),
        None => "no response".to_string(),
    }
}

impl Error {
    /// Build an authentication error from a transport failure.
    pub(crate) fn auth_transport(source: reqwest::Error) -> Self {
        Error::Auth {
            status: source.status().map(|s| s.as_u16()),
            body: String::new(),
            source: Some(source),
        }
    }

    /// Build an HTTP error from a transport failure.
    pub(crate) fn http_transport(source: reqwest::Error) -> Self {
        Error::Http {
            status: source.status().map(|s| s.as_u16()),
            body: String::new(),
            source: Some(source),
        }
    }

    /// HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Auth { status, .. } | Error::Http { status, .. } => *status,
            _ => None,
        }
    }

    /// Raw response body carried by this error, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::Auth { body, .. } | Error::Http { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Auth { .. }) || self.status() == Some(401)
    }

    /// Check if a request was attempted without a session.
    pub fn is_not_logged_in(&self) -> bool {
        matches!(self, Error::NotLoggedIn)
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(status) if status >= 500)
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
