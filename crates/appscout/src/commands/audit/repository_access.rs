use std::io::Write;

use appscout_core::use_cases::reports::{AuditRepositoryAccessInterface, InstallationAudit};
use appscout_ghapi_interface::types::GhRepository;
use async_trait::async_trait;
use clap::Parser;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    utils::CliOutput,
    Result,
};

/// Compare repositories seen through the installation and organization APIs
#[derive(Parser)]
pub(crate) struct AuditRepositoryAccessCommand {
    /// Print installation tokens in clear
    #[arg(long)]
    show_tokens: bool,
}

fn write_repositories<'r>(
    out: &mut dyn Write,
    title: &str,
    repositories: impl ExactSizeIterator<Item = &'r GhRepository>,
) -> std::io::Result<()> {
    if repositories.len() == 0 {
        return Ok(());
    }

    writeln!(out, "  {} ({}):", title, repositories.len())?;
    for repository in repositories {
        writeln!(
            out,
            "    - [{}] {}",
            repository.effective_visibility(),
            repository.full_name
        )?;
    }

    Ok(())
}

fn write_audit(out: &mut dyn Write, audit: &InstallationAudit, show_tokens: bool) -> Result<()> {
    let installation = &audit.installation;
    CliOutput::installation_header(out, installation)?;
    writeln!(out, "  Token: {}", CliOutput::token(&audit.token, show_tokens))?;
    writeln!(
        out,
        "  Repository selection: {}",
        installation.repository_selection
    )?;
    if !installation.permissions.is_empty() {
        let permissions: Vec<_> = installation
            .permissions
            .iter()
            .map(|(name, level)| format!("{name}: {level}"))
            .collect();
        writeln!(out, "  Permissions: {}", permissions.join(", "))?;
    }

    writeln!(
        out,
        "  Repositories via installation API: {}",
        audit.installation_repositories.len()
    )?;
    writeln!(
        out,
        "  Repositories via organization API: {}",
        audit.organization_repositories.len()
    )?;

    write_repositories(
        out,
        "Only via installation API",
        audit.comparison.installation_only.iter(),
    )?;
    write_repositories(
        out,
        "Only via organization API",
        audit.comparison.org_only.iter(),
    )?;

    if audit.has_potential_issue() {
        writeln!(
            out,
            "  POTENTIAL ISSUE: installation limited to selected repositories, {} organization repositories are not granted",
            audit.comparison.org_only.len()
        )?;
    }

    let critical = audit.critical_repositories();
    if !critical.is_empty() {
        writeln!(
            out,
            "  CRITICAL: {} internal repositories are not granted to the installation",
            critical.len()
        )?;
        for repository in critical {
            writeln!(out, "    - {}", repository.full_name)?;
        }
    }

    write_repositories(
        out,
        "Internal repositories via installation API",
        audit.internal_via_installation().into_iter(),
    )?;
    write_repositories(
        out,
        "Internal repositories via organization API",
        audit.internal_via_organization().into_iter(),
    )?;

    CliOutput::notices(out, 2, &audit.notices)?;
    Ok(())
}

#[async_trait]
impl Command for AuditRepositoryAccessCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let audit_access: &dyn AuditRepositoryAccessInterface = ctx.core_module.resolve_ref();
        let audit = audit_access.run(&ctx.as_core_context()).await?;

        let mut out = ctx.writer.write().await;
        CliOutput::app_header(&mut *out, &audit.app)?;
        if audit.installations.is_empty() {
            writeln!(out, "No installation found.")?;
        }
        for installation in &audit.installations {
            write_audit(&mut *out, installation, self.show_tokens)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeMap, error::Error};

    use appscout_core::{
        use_cases::reports::{
            AccessComparison, AuditRepositoryAccessInterface, InstallationAudit,
            MockAuditRepositoryAccessInterface, RepositoryAccessAudit,
        },
        CoreModule,
    };
    use appscout_ghapi_interface::types::{
        GhAccount, GhAccountType, GhApp, GhInstallation, GhInstallationToken, GhRepository,
        GhRepositorySelection, GhRepositoryVisibility,
    };
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, CommandContextTest};

    fn repository(full_name: &str, visibility: GhRepositoryVisibility) -> GhRepository {
        GhRepository {
            full_name: full_name.into(),
            visibility: Some(visibility),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn run() -> Result<(), Box<dyn Error>> {
        let api = repository("acme/api", GhRepositoryVisibility::Private);
        let wiki = repository("acme/wiki", GhRepositoryVisibility::Internal);
        let installation_repositories = vec![api.clone()];
        let organization_repositories = vec![api, wiki];
        let comparison =
            AccessComparison::compare(&installation_repositories, &organization_repositories);

        let mut audit_access = MockAuditRepositoryAccessInterface::new();
        audit_access.expect_run().once().return_once(move |_| {
            Ok(RepositoryAccessAudit {
                app: GhApp {
                    slug: Some("scout".into()),
                    name: "Scout".into(),
                    ..Default::default()
                },
                installations: vec![InstallationAudit {
                    installation: GhInstallation {
                        id: 5,
                        account: GhAccount {
                            login: Some("acme".into()),
                            account_type: Some(GhAccountType::Organization),
                            ..Default::default()
                        },
                        repository_selection: GhRepositorySelection::Selected,
                        permissions: BTreeMap::from([
                            ("contents".to_string(), "read".to_string()),
                            ("metadata".to_string(), "read".to_string()),
                        ]),
                        ..Default::default()
                    },
                    token: GhInstallationToken::from_raw("ghs_secret"),
                    installation_repositories,
                    organization_repositories,
                    comparison,
                    notices: vec![],
                }],
            })
        });

        let mut ctx = CommandContextTest::new();
        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn AuditRepositoryAccessInterface>(Box::new(audit_access))
            .build();

        assert_eq!(
            test_command(ctx, &["audit", "repository-access"]).await,
            concat!(
                "App: Scout (scout)\n",
                "Installation 5 on acme (Organization)\n",
                "  Token: ghs_****\n",
                "  Repository selection: selected\n",
                "  Permissions: contents: read, metadata: read\n",
                "  Repositories via installation API: 1\n",
                "  Repositories via organization API: 2\n",
                "  Only via organization API (1):\n",
                "    - [internal] acme/wiki\n",
                "  POTENTIAL ISSUE: installation limited to selected repositories, 1 organization repositories are not granted\n",
                "  CRITICAL: 1 internal repositories are not granted to the installation\n",
                "    - acme/wiki\n",
                "  Internal repositories via organization API (1):\n",
                "    - [internal] acme/wiki\n",
            )
        );

        Ok(())
    }
}
