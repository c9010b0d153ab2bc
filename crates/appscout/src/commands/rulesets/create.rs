use std::path::PathBuf;

use anyhow::Context;
use appscout_core::use_cases::rulesets::CreateOrganizationRulesetInterface;
use async_trait::async_trait;
use clap::Parser;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    utils::resolve_installation_id,
    Result,
};

/// Create an organization ruleset from a JSON file
#[derive(Parser)]
pub(crate) struct RulesetsCreateCommand {
    /// Organization login
    org: String,

    /// JSON file holding the ruleset definition
    #[arg(long)]
    file: PathBuf,

    /// Installation ID (defaults to DEMO_GITHUBAPP_INSTALLATIONID)
    #[arg(long)]
    installation_id: Option<u64>,
}

#[async_trait]
impl Command for RulesetsCreateCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let installation_id = resolve_installation_id(&ctx.config, self.installation_id)?;
        let content = tokio::fs::read_to_string(&self.file)
            .await
            .with_context(|| format!("Could not read {}", self.file.display()))?;
        let ruleset: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in {}", self.file.display()))?;

        let create_ruleset: &dyn CreateOrganizationRulesetInterface =
            ctx.core_module.resolve_ref();
        let created = create_ruleset
            .run(&ctx.as_core_context(), installation_id, &self.org, ruleset)
            .await?;

        writeln!(
            ctx.writer.write().await,
            "Ruleset {} created in {} (id {}, enforcement {}).",
            created.name,
            self.org,
            created.id,
            created.enforcement
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use appscout_core::{
        use_cases::rulesets::{
            CreateOrganizationRulesetInterface, MockCreateOrganizationRulesetInterface,
        },
        CoreModule,
    };
    use appscout_ghapi_interface::types::GhRuleset;
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, test_command_result, CommandContextTest};

    fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("appscout-{}-{}", std::process::id(), name));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn run() -> Result<(), Box<dyn Error>> {
        let path = temp_file(
            "ruleset.json",
            r#"{"name": "protect-main", "target": "branch", "enforcement": "active"}"#,
        );

        let mut create_ruleset = MockCreateOrganizationRulesetInterface::new();
        create_ruleset
            .expect_run()
            .once()
            .withf(|_, id, org, ruleset| *id == 8 && org == "acme" && ruleset["name"] == "protect-main")
            .return_once(|_, _, _, _| {
                Ok(GhRuleset {
                    id: 31,
                    name: "protect-main".into(),
                    enforcement: "active".into(),
                    ..Default::default()
                })
            });

        let mut ctx = CommandContextTest::new();
        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn CreateOrganizationRulesetInterface>(Box::new(
                create_ruleset,
            ))
            .build();

        let output = test_command(
            ctx,
            &[
                "rulesets",
                "create",
                "acme",
                "--file",
                path.to_str().unwrap(),
                "--installation-id",
                "8",
            ],
        )
        .await;
        std::fs::remove_file(&path)?;

        assert_eq!(
            output,
            "Ruleset protect-main created in acme (id 31, enforcement active).\n"
        );

        Ok(())
    }

    #[tokio::test]
    async fn run_invalid_json() -> Result<(), Box<dyn Error>> {
        let path = temp_file("invalid.json", "{ not json");

        let (result, output) = test_command_result(
            CommandContextTest::new(),
            &[
                "rulesets",
                "create",
                "acme",
                "--file",
                path.to_str().unwrap(),
                "--installation-id",
                "8",
            ],
        )
        .await;
        std::fs::remove_file(&path)?;

        assert!(result.is_err());
        assert_eq!(output, "");

        Ok(())
    }
}
