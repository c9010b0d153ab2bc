//! Domain errors.

use thiserror::Error;

/// Domain error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`appscout_ghapi_interface::ApiError`].
    #[error("API error: {source}")]
    ApiError {
        source: appscout_ghapi_interface::ApiError,
    },

    #[error("No access token: pass an installation ID or set DEMO_GITHUB_TOKEN")]
    MissingAccessToken,
}

impl From<appscout_ghapi_interface::ApiError> for DomainError {
    fn from(e: appscout_ghapi_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
