use thiserror::Error;

/// Raised by `TranslationRequest::serialize` when a required field is unset.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("missing required parameter {field} for {type_name}")]
    MissingRequiredField {
        field: &'static str,
        type_name: &'static str,
    },
}

impl RequestError {
    pub fn missing(field: &'static str, type_name: &'static str) -> Self {
        Self::MissingRequiredField { field, type_name }
    }

    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingRequiredField { field, .. } => field,
        }
    }
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("endpoint is required")]
    MissingEndpoint,

    #[error("request failed: {0}")]
    Send(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}
