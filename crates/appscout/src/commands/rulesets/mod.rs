//! Organization ruleset commands.

mod create;
mod list;

use async_trait::async_trait;
use clap::{Parser, Subcommand};

use self::{create::RulesetsCreateCommand, list::RulesetsListCommand};
use super::{Command, CommandContext};
use crate::Result;

/// List and create organization rulesets
#[derive(Parser)]
pub(crate) struct RulesetsCommand {
    #[clap(subcommand)]
    inner: RulesetsSubCommand,
}

#[async_trait]
impl Command for RulesetsCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        self.inner.execute(ctx).await
    }
}

#[derive(Subcommand)]
enum RulesetsSubCommand {
    List(RulesetsListCommand),
    Create(RulesetsCreateCommand),
}

#[async_trait]
impl Command for RulesetsSubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::List(sub) => sub.execute(ctx).await,
            Self::Create(sub) => sub.execute(ctx).await,
        }
    }
}
