//! Auth.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use appscout_config::{AppCredentialsConfig, Config};
use appscout_crypto::JwtUtils;
use http::{header, HeaderMap};
use reqwest::ClientBuilder;
use serde::{Deserialize, Serialize};

use crate::errors::GitHubError;

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";
const JWT_CLOCK_DRIFT_IN_SECONDS: u64 = 60;
const JWT_LIFETIME_IN_SECONDS: u64 = 600;

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct JwtClaims {
    pub iat: u64,
    pub exp: u64,
    pub iss: String,
}

/// Get a GitHub client builder, with no credentials attached.
pub fn get_anonymous_client_builder(config: &Config) -> ClientBuilder {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static(GITHUB_MEDIA_TYPE),
    );
    headers.insert(
        "X-GitHub-Api-Version",
        header::HeaderValue::from_static(GITHUB_API_VERSION),
    );

    ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.github.connect_timeout))
        .user_agent(format!("appscout/{}", config.version))
        .default_headers(headers)
}

/// Build a GitHub URL.
pub fn build_github_url<T: Into<String>>(config: &Config, path: T) -> String {
    format!("{}{}", config.api.github.root_url, path.into())
}

pub(crate) fn now_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

pub(crate) fn create_app_token(
    credentials: &AppCredentialsConfig,
    now_ts: u64,
) -> Result<String, GitHubError> {
    // https://docs.github.com/en/apps/creating-github-apps/authenticating-with-a-github-app/generating-a-json-web-token-jwt-for-a-github-app
    if !credentials.is_complete() {
        return Err(GitHubError::MissingCredentials);
    }

    let claims = JwtClaims {
        // Backdated against clock drift
        iat: now_ts.saturating_sub(JWT_CLOCK_DRIFT_IN_SECONDS),
        exp: now_ts + JWT_LIFETIME_IN_SECONDS,
        // App ID or client ID
        iss: credentials.app_id.clone(),
    };

    JwtUtils::create_jwt(&credentials.private_key, &claims)
        .map_err(|e| GitHubError::ImplementationError { source: e.into() })
}

#[cfg(test)]
mod tests {
    use appscout_crypto::RsaUtils;
    use pretty_assertions::assert_eq;

    use super::*;

    fn arrange_credentials() -> AppCredentialsConfig {
        let (pri_key, _) = RsaUtils::generate_rsa_keys();
        AppCredentialsConfig {
            app_id: "Iv1.8a61f9b3a7aba766".into(),
            private_key: pri_key.to_string(),
        }
    }

    #[test]
    fn test_create_app_token() {
        let credentials = arrange_credentials();
        let token = create_app_token(&credentials, 1_700_000_000).unwrap();
        let decoded_token: JwtClaims = JwtUtils::decode_jwt(&token).unwrap();

        assert_eq!(decoded_token.iat, 1_699_999_940);
        assert_eq!(decoded_token.exp - decoded_token.iat, 660);
        assert_eq!(decoded_token.iss, "Iv1.8a61f9b3a7aba766");
        assert_eq!(JwtUtils::algorithm_name(&token).unwrap(), "RS256");
    }

    #[test]
    fn test_create_app_token_without_credentials() {
        let credentials = AppCredentialsConfig::default();
        assert!(matches!(
            create_app_token(&credentials, 0),
            Err(GitHubError::MissingCredentials)
        ));
    }

    #[test]
    fn test_build_github_url() {
        let mut config = Config::from_env_no_version();
        config.api.github.root_url = "http://localhost:8080".into();

        assert_eq!(
            build_github_url(&config, "/app/installations"),
            "http://localhost:8080/app/installations"
        );
    }

    #[test]
    fn test_get_anonymous_client_builder() {
        let config = Config::from_env_no_version();
        get_anonymous_client_builder(&config).build().unwrap();
    }
}
