use std::sync::Arc;

use appscout_config::{AppCredentialsConfig, Config, CredentialProfile};
use appscout_core::CoreModule;
use appscout_ghapi_github::GitHubApiService;
use clap::Parser;
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    config_validator::validate_credentials,
    Result,
};

/// Inspect GitHub App installations, organizations and repositories
#[derive(Parser)]
#[command(version, long_about = None)]
pub struct Args {
    /// Credential profile (`enterprise` or `demo`)
    #[arg(long, global = true)]
    profile: Option<CredentialProfile>,

    #[command(subcommand)]
    cmd: SubCommand,
}

impl Args {
    /// Profile used to sign app calls, if the command calls GitHub at all.
    pub fn credential_profile(&self) -> Option<CredentialProfile> {
        self.cmd
            .default_profile()
            .map(|default| self.profile.unwrap_or(default))
    }
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let credentials = match args.credential_profile() {
            Some(profile) => {
                validate_credentials(&config, profile)?;
                let credentials = config.credentials(profile).clone();
                info!(profile = %profile, app_id = %credentials.app_id, "Using credential profile");
                credentials
            }
            None => AppCredentialsConfig::default(),
        };

        let ctx = CommandContext {
            config: config.clone(),
            api_service: Box::new(GitHubApiService::new(config, credentials)),
            core_module: CoreModule::builder().build(),
            writer: Arc::new(RwLock::new(std::io::stdout())),
        };

        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(Self::parse_args_async(args, ctx))
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_for(args: &[&str]) -> Option<CredentialProfile> {
        let mut all = vec!["appscout"];
        all.extend(args);
        Args::try_parse_from(all).unwrap().credential_profile()
    }

    #[test]
    fn default_profiles() {
        assert_eq!(profile_for(&["app", "show"]), Some(CredentialProfile::Demo));
        assert_eq!(
            profile_for(&["enterprise", "apps"]),
            Some(CredentialProfile::Enterprise)
        );
        assert_eq!(
            profile_for(&["audit", "repository-access"]),
            Some(CredentialProfile::Demo)
        );
        assert_eq!(profile_for(&["utils", "pem-to-string", "key.pem"]), None);
    }

    #[test]
    fn profile_override() {
        assert_eq!(
            profile_for(&["--profile", "enterprise", "installations", "list"]),
            Some(CredentialProfile::Enterprise)
        );
        assert_eq!(
            profile_for(&["enterprise", "report", "--profile", "demo"]),
            Some(CredentialProfile::Demo)
        );
        assert_eq!(
            profile_for(&["--profile", "demo", "utils", "pem-to-string", "key.pem"]),
            None
        );
    }

    #[test]
    fn invalid_profile() {
        assert!(Args::try_parse_from(["appscout", "--profile", "other", "app", "show"]).is_err());
    }
}
