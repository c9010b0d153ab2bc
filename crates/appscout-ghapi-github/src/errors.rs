use appscout_ghapi_interface::ApiError;

#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("GitHub API answered {status} on {method} {url}: {message}")]
    StatusError {
        status: u16,
        method: String,
        url: String,
        message: String,
    },

    #[error("GitHub App credentials are missing")]
    MissingCredentials,

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::StatusError {
                status,
                method,
                url,
                message,
            } => ApiError::HttpStatus {
                status,
                method,
                url,
                message,
            },
            e => ApiError::ImplementationError { source: e.into() },
        }
    }
}
