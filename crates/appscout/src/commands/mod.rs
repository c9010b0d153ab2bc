//! Commands.

use std::{io::Write, sync::Arc};

use appscout_config::{Config, CredentialProfile};
use appscout_core::{CoreContext, CoreModule};
use appscout_ghapi_interface::ApiService;
use async_trait::async_trait;
use clap::Subcommand;
use tokio::sync::RwLock;

use self::{
    app::AppCommand, audit::AuditCommand, enterprise::EnterpriseCommand,
    installations::InstallationsCommand, repositories::RepositoriesCommand,
    rulesets::RulesetsCommand, utils::UtilsCommand,
};
use crate::Result;

mod app;
mod audit;
mod enterprise;
mod installations;
mod repositories;
mod rulesets;
mod utils;

pub(crate) struct CommandContext {
    pub config: Config,
    pub api_service: Box<dyn ApiService + Send + Sync>,
    pub core_module: CoreModule,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
        }
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    App(AppCommand),
    Installations(InstallationsCommand),
    Repositories(RepositoriesCommand),
    Enterprise(EnterpriseCommand),
    Audit(AuditCommand),
    Rulesets(RulesetsCommand),
    Utils(UtilsCommand),
}

impl SubCommand {
    /// Credential profile used when `--profile` is not given.
    /// `None` for commands that never call GitHub.
    pub fn default_profile(&self) -> Option<CredentialProfile> {
        match self {
            Self::Utils(_) => None,
            Self::Enterprise(_) => Some(CredentialProfile::Enterprise),
            _ => Some(CredentialProfile::Demo),
        }
    }
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::App(sub) => sub.execute(ctx).await,
            Self::Installations(sub) => sub.execute(ctx).await,
            Self::Repositories(sub) => sub.execute(ctx).await,
            Self::Enterprise(sub) => sub.execute(ctx).await,
            Self::Audit(sub) => sub.execute(ctx).await,
            Self::Rulesets(sub) => sub.execute(ctx).await,
            Self::Utils(sub) => sub.execute(ctx).await,
        }
    }
}
