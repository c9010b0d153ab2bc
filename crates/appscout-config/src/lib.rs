//! Config module.

mod profiles;

use std::env;

pub use profiles::{CredentialProfile, ProfileError};

/// Maximum page size accepted by the GitHub REST API.
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Default)]
pub struct AppCredentialsConfig {
    /// GitHub App identifier (numeric app ID or client ID).
    pub app_id: String,
    /// GitHub App private key (PEM).
    pub private_key: String,
}

impl AppCredentialsConfig {
    /// Both values are present.
    pub fn is_complete(&self) -> bool {
        !self.app_id.is_empty() && !self.private_key.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
    /// Items requested per page on paginated endpoints.
    pub page_size: u32,
    /// Personal access token, used where no installation is involved.
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Tool configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Enterprise app credentials.
    pub enterprise_app: AppCredentialsConfig,
    /// Demo app credentials.
    pub demo_app: AppCredentialsConfig,
    /// Default installation ID for the demo app.
    pub demo_installation_id: u64,
    /// API options.
    pub api: ApiConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// GitHub Actions output file, when running inside a workflow.
    pub github_output_path: String,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Config {
        Self::from_lookup(version, |name| env::var(name).ok())
    }

    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into())
    }

    /// Create configuration from an arbitrary variable source.
    pub fn from_lookup<F>(version: String, lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = EnvReader { lookup };

        Config {
            enterprise_app: vars.credentials(CredentialProfile::Enterprise),
            demo_app: vars.credentials(CredentialProfile::Demo),
            demo_installation_id: vars.to_u64("DEMO_GITHUBAPP_INSTALLATIONID", 0),
            api: ApiConfig {
                github: ApiGitHubConfig {
                    connect_timeout: vars.to_u64("APPSCOUT_API_GITHUB_CONNECT_TIMEOUT", 5000),
                    root_url: vars
                        .to_str("APPSCOUT_API_GITHUB_ROOT_URL", "https://api.github.com")
                        .trim_end_matches('/')
                        .to_string(),
                    page_size: vars
                        .to_u32("APPSCOUT_API_GITHUB_PAGE_SIZE", MAX_PAGE_SIZE)
                        .clamp(1, MAX_PAGE_SIZE),
                    token: vars.to_str("DEMO_GITHUB_TOKEN", ""),
                },
            },
            logging: LoggingConfig {
                use_bunyan: vars.to_bool("APPSCOUT_LOGGING_USE_BUNYAN", false),
            },
            github_output_path: vars.to_str("GITHUB_OUTPUT", ""),
            version,
        }
    }

    /// Credentials for a profile.
    pub fn credentials(&self, profile: CredentialProfile) -> &AppCredentialsConfig {
        match profile {
            CredentialProfile::Enterprise => &self.enterprise_app,
            CredentialProfile::Demo => &self.demo_app,
        }
    }
}

struct EnvReader<F> {
    lookup: F,
}

impl<F> EnvReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn credentials(&self, profile: CredentialProfile) -> AppCredentialsConfig {
        AppCredentialsConfig {
            app_id: self.to_str(profile.app_id_var(), "").trim().to_string(),
            private_key: self.to_str(profile.private_key_var(), ""),
        }
    }

    fn to_u64(&self, name: &str, default: u64) -> u64 {
        (self.lookup)(name)
            .map(|e| e.parse().unwrap_or(default))
            .unwrap_or(default)
    }

    fn to_u32(&self, name: &str, default: u32) -> u32 {
        (self.lookup)(name)
            .map(|e| e.parse().unwrap_or(default))
            .unwrap_or(default)
    }

    fn to_bool(&self, name: &str, default: bool) -> bool {
        (self.lookup)(name).map(|e| !e.is_empty()).unwrap_or(default)
    }

    fn to_str(&self, name: &str, default: &str) -> String {
        (self.lookup)(name)
            .unwrap_or_else(|| default.to_string())
            .replace("\\n", "\n")
    }
}
