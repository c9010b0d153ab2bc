//! API errors.

use thiserror::Error;

/// API error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a non-success status.
    #[error("GitHub API answered {status} on {method} {url}: {message}")]
    HttpStatus {
        status: u16,
        method: String,
        url: String,
        message: String,
    },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl ApiError {
    /// HTTP status, if the error comes from an API answer.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::ImplementationError { .. } => None,
        }
    }

    /// 403 Forbidden.
    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }

    /// 404 Not Found.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// 422 Unprocessable Entity.
    pub fn is_unprocessable(&self) -> bool {
        self.status() == Some(422)
    }
}

/// Result alias for `ApiError`.
pub type Result<T, E = ApiError> = core::result::Result<T, E>;
