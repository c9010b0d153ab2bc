//! Repository commands.

mod create;
mod list;

use async_trait::async_trait;
use clap::{Parser, Subcommand};

use self::{create::RepositoriesCreateCommand, list::RepositoriesListCommand};
use super::{Command, CommandContext};
use crate::Result;

/// List and create repositories
#[derive(Parser)]
pub(crate) struct RepositoriesCommand {
    #[clap(subcommand)]
    inner: RepositoriesSubCommand,
}

#[async_trait]
impl Command for RepositoriesCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        self.inner.execute(ctx).await
    }
}

#[derive(Subcommand)]
enum RepositoriesSubCommand {
    List(RepositoriesListCommand),
    Create(RepositoriesCreateCommand),
}

#[async_trait]
impl Command for RepositoriesSubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::List(sub) => sub.execute(ctx).await,
            Self::Create(sub) => sub.execute(ctx).await,
        }
    }
}
