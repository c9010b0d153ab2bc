//! Installation commands.

mod list;
mod show;
mod token;

use async_trait::async_trait;
use clap::{Parser, Subcommand};

use self::{
    list::InstallationsListCommand, show::InstallationsShowCommand,
    token::InstallationsTokenCommand,
};
use super::{Command, CommandContext};
use crate::Result;

/// Inspect app installations
#[derive(Parser)]
pub(crate) struct InstallationsCommand {
    #[clap(subcommand)]
    inner: InstallationsSubCommand,
}

#[async_trait]
impl Command for InstallationsCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        self.inner.execute(ctx).await
    }
}

#[derive(Subcommand)]
enum InstallationsSubCommand {
    List(InstallationsListCommand),
    Show(InstallationsShowCommand),
    Token(InstallationsTokenCommand),
}

#[async_trait]
impl Command for InstallationsSubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::List(sub) => sub.execute(ctx).await,
            Self::Show(sub) => sub.execute(ctx).await,
            Self::Token(sub) => sub.execute(ctx).await,
        }
    }
}
