use appscout_core::use_cases::installations::DescribeInstallationInterface;
use async_trait::async_trait;
use clap::Parser;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    utils::CliOutput,
    Result,
};

/// Show one installation: account, repository selection and permissions
#[derive(Parser)]
pub(crate) struct InstallationsShowCommand {
    /// Installation ID
    installation_id: u64,
}

#[async_trait]
impl Command for InstallationsShowCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let describe: &dyn DescribeInstallationInterface = ctx.core_module.resolve_ref();
        let installation = describe
            .run(&ctx.as_core_context(), self.installation_id)
            .await?;

        let mut out = ctx.writer.write().await;
        CliOutput::installation_header(&mut *out, &installation)?;
        writeln!(
            out,
            "  Repository selection: {}",
            installation.repository_selection
        )?;
        writeln!(out, "  Created: {}", CliOutput::date(&installation.created_at))?;
        if installation.permissions.is_empty() {
            writeln!(out, "  Permissions: none")?;
        } else {
            writeln!(out, "  Permissions:")?;
            for (name, level) in &installation.permissions {
                writeln!(out, "    - {}: {}", name, level)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeMap, error::Error};

    use appscout_core::{
        use_cases::installations::{
            DescribeInstallationInterface, MockDescribeInstallationInterface,
        },
        CoreModule,
    };
    use appscout_ghapi_interface::types::{
        GhAccount, GhAccountType, GhInstallation, GhRepositorySelection,
    };
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, CommandContextTest};

    #[tokio::test]
    async fn run() -> Result<(), Box<dyn Error>> {
        let mut describe = MockDescribeInstallationInterface::new();
        describe
            .expect_run()
            .once()
            .withf(|_, id| *id == 7)
            .return_once(|_, _| {
                Ok(GhInstallation {
                    id: 7,
                    account: GhAccount {
                        login: Some("acme".into()),
                        account_type: Some(GhAccountType::Organization),
                        ..Default::default()
                    },
                    repository_selection: GhRepositorySelection::Selected,
                    permissions: BTreeMap::from([("metadata".to_string(), "read".to_string())]),
                    ..Default::default()
                })
            });

        let mut ctx = CommandContextTest::new();
        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn DescribeInstallationInterface>(Box::new(describe))
            .build();

        assert_eq!(
            test_command(ctx, &["installations", "show", "7"]).await,
            concat!(
                "Installation 7 on acme (Organization)\n",
                "  Repository selection: selected\n",
                "  Created: 1970-01-01T00:00:00Z\n",
                "  Permissions:\n",
                "    - metadata: read\n",
            )
        );

        Ok(())
    }
}
