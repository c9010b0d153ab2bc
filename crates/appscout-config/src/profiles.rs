use std::{fmt::Display, str::FromStr};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Invalid credential profile: {kind} (expected 'enterprise' or 'demo')")]
    InvalidProfileKind { kind: String },
}

/// Which pair of environment variables holds the GitHub App credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialProfile {
    /// `APP_ENT_KEY` / `APP_ENT_CLIENTID`.
    Enterprise,
    /// `DEMO_GITHUBAPP_PRIVATE_KEY` / `DEMO_GITHUBAPP_APPID`.
    Demo,
}

impl CredentialProfile {
    /// Environment variable holding the private key.
    pub fn private_key_var(self) -> &'static str {
        match self {
            Self::Enterprise => "APP_ENT_KEY",
            Self::Demo => "DEMO_GITHUBAPP_PRIVATE_KEY",
        }
    }

    /// Environment variable holding the app identifier.
    pub fn app_id_var(self) -> &'static str {
        match self {
            Self::Enterprise => "APP_ENT_CLIENTID",
            Self::Demo => "DEMO_GITHUBAPP_APPID",
        }
    }
}

impl FromStr for CredentialProfile {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_lowercase()[..] {
            "enterprise" | "ent" => Ok(Self::Enterprise),
            "demo" => Ok(Self::Demo),
            _ => Err(ProfileError::InvalidProfileKind { kind: s.into() }),
        }
    }
}

impl Display for CredentialProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enterprise => write!(f, "enterprise"),
            Self::Demo => write!(f, "demo"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_profiles() {
        assert_eq!(
            CredentialProfile::from_str("Enterprise").unwrap(),
            CredentialProfile::Enterprise
        );
        assert_eq!(
            CredentialProfile::from_str("ent").unwrap(),
            CredentialProfile::Enterprise
        );
        assert_eq!(
            CredentialProfile::from_str("demo").unwrap(),
            CredentialProfile::Demo
        );
        assert!(CredentialProfile::from_str("other").is_err());
    }

    #[test]
    fn variable_names() {
        assert_eq!(CredentialProfile::Enterprise.private_key_var(), "APP_ENT_KEY");
        assert_eq!(CredentialProfile::Enterprise.app_id_var(), "APP_ENT_CLIENTID");
        assert_eq!(
            CredentialProfile::Demo.private_key_var(),
            "DEMO_GITHUBAPP_PRIVATE_KEY"
        );
        assert_eq!(CredentialProfile::Demo.app_id_var(), "DEMO_GITHUBAPP_APPID");
    }
}
