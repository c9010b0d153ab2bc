use appscout_core::use_cases::rulesets::ListOrganizationRulesetsInterface;
use async_trait::async_trait;
use clap::Parser;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    utils::resolve_installation_id,
    Result,
};

/// List rulesets of an organization
#[derive(Parser)]
pub(crate) struct RulesetsListCommand {
    /// Organization login
    org: String,

    /// Installation ID (defaults to DEMO_GITHUBAPP_INSTALLATIONID)
    #[arg(long)]
    installation_id: Option<u64>,
}

#[async_trait]
impl Command for RulesetsListCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let installation_id = resolve_installation_id(&ctx.config, self.installation_id)?;
        let list_rulesets: &dyn ListOrganizationRulesetsInterface = ctx.core_module.resolve_ref();
        let rulesets = list_rulesets
            .run(&ctx.as_core_context(), installation_id, &self.org)
            .await?;

        let mut out = ctx.writer.write().await;
        if rulesets.is_empty() {
            writeln!(out, "No ruleset found in {}.", self.org)?;
            return Ok(());
        }

        writeln!(out, "Rulesets of {}:", self.org)?;
        for ruleset in rulesets {
            writeln!(
                out,
                "- {}: {} (target {}, enforcement {})",
                ruleset.id,
                ruleset.name,
                ruleset.target.as_deref().unwrap_or("-"),
                ruleset.enforcement
            )?;
        }

        Ok(())
    }
}
