use appscout_core::use_cases::installations::GetAuthenticatedAppInterface;
use async_trait::async_trait;
use clap::Parser;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    utils::CliOutput,
    Result,
};

/// Show the app the credentials belong to
#[derive(Parser)]
pub(crate) struct AppShowCommand;

#[async_trait]
impl Command for AppShowCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let get_app: &dyn GetAuthenticatedAppInterface = ctx.core_module.resolve_ref();
        let app = get_app.run(&ctx.as_core_context()).await?;

        let mut out = ctx.writer.write().await;
        CliOutput::app_header(&mut *out, &app)?;
        writeln!(out, "  ID: {}", app.id)?;
        writeln!(out, "  Client ID: {}", app.client_id.as_deref().unwrap_or("-"))?;
        if let Some(owner) = &app.owner {
            writeln!(out, "  Owner: {}", owner.display_name())?;
        }
        if let Some(description) = app.description.as_deref().filter(|d| !d.is_empty()) {
            writeln!(out, "  Description: {}", description)?;
        }
        if let Some(url) = &app.html_url {
            writeln!(out, "  URL: {}", url)?;
        }
        writeln!(out, "  Created: {}", CliOutput::date(&app.created_at))?;

        if !app.permissions.is_empty() {
            writeln!(out, "  Permissions:")?;
            for (name, level) in &app.permissions {
                writeln!(out, "    - {}: {}", name, level)?;
            }
        }
        if !app.events.is_empty() {
            writeln!(out, "  Events: {}", app.events.join(", "))?;
        }

        Ok(())
    }
}
