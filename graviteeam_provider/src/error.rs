//! Errors raised while talking to Gravitee AM.

use graviteeam_core::{compound_id::CompoundIdError, Diagnostic, Diagnostics};
use reqwest::StatusCode;
use thiserror::Error;

/// Result alias for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Everything that can abort a single provider operation.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// A compound identifier had the wrong number of segments or an empty one.
    #[error(transparent)]
    InvalidId(#[from] CompoundIdError),

    /// The management API answered with a status the operation does not expect.
    #[error("{status} while requesting {what}")]
    UnexpectedStatus {
        /// The received status, e.g. `404 Not Found`.
        status: StatusCode,
        /// What was being requested.
        what: String,
    },

    /// The response body could not be decoded.
    #[error("invalid response body for {what}: {source}")]
    Decode {
        /// What was being requested.
        what: String,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// The request could not be sent or its body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The token exchange failed.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The provider settings are unusable.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ProviderError {
    /// Summary line used when surfacing the error as a diagnostic.
    pub fn summary(&self) -> &'static str {
        match self {
            ProviderError::InvalidId(_) => "Error parsing id",
            ProviderError::UnexpectedStatus { .. } => "Unexpected HTTP error code received",
            ProviderError::Decode { .. } => "Invalid format received",
            ProviderError::Http(_) => "Unable to read item",
            ProviderError::Authentication(_) => "Unable to authenticate with Gravitee AM",
            ProviderError::Configuration(_) => "Invalid provider configuration",
        }
    }

    /// Whether the error is a 404 from the management API.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::UnexpectedStatus { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

impl From<ProviderError> for Diagnostic {
    fn from(err: ProviderError) -> Self {
        Diagnostic::error(err.summary(), err.to_string())
    }
}

impl From<ProviderError> for Diagnostics {
    fn from(err: ProviderError) -> Self {
        Diagnostic::from(err).into()
    }
}
