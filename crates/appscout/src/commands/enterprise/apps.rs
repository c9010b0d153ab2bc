use appscout_core::use_cases::reports::BuildEnterpriseAppInventoryInterface;
use async_trait::async_trait;
use clap::Parser;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    utils::CliOutput,
    Result,
};

/// List apps installed in each organization of the enterprises
#[derive(Parser)]
pub(crate) struct EnterpriseAppsCommand;

#[async_trait]
impl Command for EnterpriseAppsCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let build_inventory: &dyn BuildEnterpriseAppInventoryInterface =
            ctx.core_module.resolve_ref();
        let inventory = build_inventory.run(&ctx.as_core_context()).await?;

        let mut out = ctx.writer.write().await;
        CliOutput::app_header(&mut *out, &inventory.app)?;

        for entry in &inventory.enterprises {
            writeln!(
                out,
                "Enterprise {} (installation {})",
                entry.enterprise.as_deref().unwrap_or("Unknown"),
                entry.installation.id
            )?;

            for org in &entry.organizations {
                writeln!(
                    out,
                    "  Organization {}: {} app(s)",
                    org.organization.login,
                    org.apps.len()
                )?;
                for app in &org.apps {
                    writeln!(
                        out,
                        "    - {}: {} (client ID {})",
                        app.id,
                        app.app_slug.as_deref().unwrap_or("-"),
                        app.client_id.as_deref().unwrap_or("-")
                    )?;
                }
            }
            CliOutput::notices(&mut *out, 2, &entry.notices)?;
        }

        Ok(())
    }
}
