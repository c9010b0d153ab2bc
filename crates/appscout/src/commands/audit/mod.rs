//! Audit commands.

mod repository_access;

use async_trait::async_trait;
use clap::{Parser, Subcommand};

use self::repository_access::AuditRepositoryAccessCommand;
use super::{Command, CommandContext};
use crate::Result;

/// Audit what installations can reach
#[derive(Parser)]
pub(crate) struct AuditCommand {
    #[clap(subcommand)]
    inner: AuditSubCommand,
}

#[async_trait]
impl Command for AuditCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        self.inner.execute(ctx).await
    }
}

#[derive(Subcommand)]
enum AuditSubCommand {
    RepositoryAccess(AuditRepositoryAccessCommand),
}

#[async_trait]
impl Command for AuditSubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::RepositoryAccess(sub) => sub.execute(ctx).await,
        }
    }
}
