use appscout_core::use_cases::reports::BuildRepositoryInventoryInterface;
use async_trait::async_trait;
use clap::Parser;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    utils::CliOutput,
    Result,
};

/// List organization repositories for every installation
#[derive(Parser)]
pub(crate) struct RepositoriesListCommand {
    /// Also look the app up by slug, with each installation token
    #[arg(long)]
    lookup_app: bool,

    /// Print installation tokens in clear
    #[arg(long)]
    show_tokens: bool,
}

#[async_trait]
impl Command for RepositoriesListCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let build_inventory: &dyn BuildRepositoryInventoryInterface =
            ctx.core_module.resolve_ref();
        let inventory = build_inventory
            .run(&ctx.as_core_context(), self.lookup_app)
            .await?;

        let mut out = ctx.writer.write().await;
        CliOutput::app_header(&mut *out, &inventory.app)?;
        if inventory.installations.is_empty() {
            writeln!(out, "No installation found.")?;
        }

        for entry in &inventory.installations {
            CliOutput::installation_header(&mut *out, &entry.installation)?;
            writeln!(
                out,
                "  Token: {}",
                CliOutput::token(&entry.token, self.show_tokens)
            )?;
            if let Some(app) = &entry.app {
                writeln!(out, "  App lookup: {} (id {})", app.name, app.id)?;
            }

            writeln!(out, "  Repositories ({}):", entry.repositories.len())?;
            for repository in &entry.repositories {
                writeln!(
                    out,
                    "    - [{}] {}",
                    repository.effective_visibility(),
                    repository.full_name
                )?;
            }
            CliOutput::notices(&mut *out, 2, &entry.notices)?;
        }

        Ok(())
    }
}
