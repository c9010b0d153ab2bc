//! App commands.

mod show;

use async_trait::async_trait;
use clap::{Parser, Subcommand};

use self::show::AppShowCommand;
use super::{Command, CommandContext};
use crate::Result;

/// Inspect the authenticated GitHub App
#[derive(Parser)]
pub(crate) struct AppCommand {
    #[clap(subcommand)]
    inner: AppSubCommand,
}

#[async_trait]
impl Command for AppCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        self.inner.execute(ctx).await
    }
}

#[derive(Subcommand)]
enum AppSubCommand {
    Show(AppShowCommand),
}

#[async_trait]
impl Command for AppSubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Show(sub) => sub.execute(ctx).await,
        }
    }
}
