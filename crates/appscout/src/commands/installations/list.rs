use appscout_core::use_cases::installations::ListInstallationsInterface;
use async_trait::async_trait;
use clap::Parser;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// List installations of the app
#[derive(Parser)]
pub(crate) struct InstallationsListCommand;

#[async_trait]
impl Command for InstallationsListCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let list_installations: &dyn ListInstallationsInterface = ctx.core_module.resolve_ref();
        let installations = list_installations.run(&ctx.as_core_context()).await?;

        let mut out = ctx.writer.write().await;
        if installations.is_empty() {
            writeln!(out, "No installation found.")?;
            return Ok(());
        }

        writeln!(out, "Found {} installation(s):", installations.len())?;
        for installation in installations {
            writeln!(
                out,
                "- {}: {} ({}), repositories: {}",
                installation.id,
                installation.account.display_name(),
                installation.target_kind(),
                installation.repository_selection
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use appscout_core::{
        use_cases::installations::{ListInstallationsInterface, MockListInstallationsInterface},
        CoreModule,
    };
    use appscout_ghapi_interface::types::{
        GhAccount, GhAccountType, GhInstallation, GhRepositorySelection,
    };
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, CommandContextTest};

    fn context_with(installations: Vec<GhInstallation>) -> CommandContextTest {
        let mut list_installations = MockListInstallationsInterface::new();
        list_installations
            .expect_run()
            .once()
            .return_once(move |_| Ok(installations));

        let mut ctx = CommandContextTest::new();
        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn ListInstallationsInterface>(Box::new(
                list_installations,
            ))
            .build();
        ctx
    }

    #[tokio::test]
    async fn run() -> Result<(), Box<dyn Error>> {
        let ctx = context_with(vec![
            GhInstallation {
                id: 1,
                account: GhAccount {
                    login: Some("acme".into()),
                    account_type: Some(GhAccountType::Organization),
                    ..Default::default()
                },
                ..Default::default()
            },
            GhInstallation {
                id: 2,
                account: GhAccount {
                    slug: Some("acme-corp".into()),
                    ..Default::default()
                },
                target_type: Some("Enterprise".into()),
                repository_selection: GhRepositorySelection::Selected,
                ..Default::default()
            },
        ]);

        assert_eq!(
            test_command(ctx, &["installations", "list"]).await,
            concat!(
                "Found 2 installation(s):\n",
                "- 1: acme (Organization), repositories: all\n",
                "- 2: acme-corp (Enterprise), repositories: selected\n",
            )
        );

        Ok(())
    }

    #[tokio::test]
    async fn run_empty() -> Result<(), Box<dyn Error>> {
        let ctx = context_with(vec![]);

        assert_eq!(
            test_command(ctx, &["installations", "list"]).await,
            "No installation found.\n"
        );

        Ok(())
    }
}
