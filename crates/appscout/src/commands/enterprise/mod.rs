//! Enterprise commands.

mod apps;
mod report;

use async_trait::async_trait;
use clap::{Parser, Subcommand};

use self::{apps::EnterpriseAppsCommand, report::EnterpriseReportCommand};
use super::{Command, CommandContext};
use crate::Result;

/// Enterprise installations: installed apps, organizations and members
#[derive(Parser)]
pub(crate) struct EnterpriseCommand {
    #[clap(subcommand)]
    inner: EnterpriseSubCommand,
}

#[async_trait]
impl Command for EnterpriseCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        self.inner.execute(ctx).await
    }
}

#[derive(Subcommand)]
enum EnterpriseSubCommand {
    Apps(EnterpriseAppsCommand),
    Report(EnterpriseReportCommand),
}

#[async_trait]
impl Command for EnterpriseSubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Apps(sub) => sub.execute(ctx).await,
            Self::Report(sub) => sub.execute(ctx).await,
        }
    }
}
