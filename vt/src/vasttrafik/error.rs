//! Västtrafik client error types.

use std::fmt;

/// Errors from the Västtrafik HTTP client.
#[derive(Debug)]
pub enum PlannerError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// Invalid or missing auth key
    Unauthorized,

    /// The planner answered, but with an error message instead of data
    Server { code: Option<String>, message: String },
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerError::Http(e) => write!(f, "HTTP error: {e}"),
            PlannerError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            PlannerError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            PlannerError::Unauthorized => write!(f, "unauthorized (invalid auth key)"),
            PlannerError::Server { code, message } => match code {
                Some(code) => write!(f, "planner error {code}: {message}"),
                None => write!(f, "planner error: {message}"),
            },
        }
    }
}

impl std::error::Error for PlannerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlannerError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PlannerError {
    fn from(err: reqwest::Error) -> Self {
        PlannerError::Http(err)
    }
}
