//! Validation utilities.

use std::fmt::Write;

use appscout_config::{Config, CredentialProfile};
use appscout_crypto::RsaUtils;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables ({} profile):\n{}", profile, errors)]
    EnvVarsError {
        profile: CredentialProfile,
        errors: String,
    },
}

#[inline]
fn _missing(error: &mut String, name: &str) {
    error.push('\n');
    let _ = write!(error, "  - Missing env. var.: {}", name);
}

#[inline]
fn _invalid_key(error: &mut String, name: &str) {
    error.push('\n');
    let _ = write!(error, "  - Invalid private key: {}", name);
}

/// Check that the credentials of a profile are present and usable.
pub fn validate_credentials(
    config: &Config,
    profile: CredentialProfile,
) -> Result<(), ValidationError> {
    let credentials = config.credentials(profile);
    let mut error = String::new();

    if credentials.private_key.is_empty() {
        _missing(&mut error, profile.private_key_var());
    } else if RsaUtils::validate_private_key(&credentials.private_key).is_err() {
        _invalid_key(&mut error, profile.private_key_var());
    }

    if credentials.app_id.is_empty() {
        _missing(&mut error, profile.app_id_var());
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError {
            profile,
            errors: error,
        })
    }
}
