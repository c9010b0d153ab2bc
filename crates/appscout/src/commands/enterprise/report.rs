use std::io::Write;

use appscout_core::use_cases::reports::{
    BuildEnterpriseReportInterface, InstallationReport, OrganizationInstallState,
    OrganizationReport,
};
use async_trait::async_trait;
use clap::Parser;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    utils::CliOutput,
    Result,
};

/// Report organizations, repositories and members of every installation,
/// installing the app where it is missing
#[derive(Parser)]
pub(crate) struct EnterpriseReportCommand {
    /// Only report missing installations, do not install
    #[arg(long)]
    no_install: bool,
}

fn install_state_label(state: OrganizationInstallState) -> String {
    match state {
        OrganizationInstallState::AlreadyInstalled => "already installed".into(),
        OrganizationInstallState::NewlyInstalled { installation_id } => {
            format!("newly installed (installation {installation_id})")
        }
        OrganizationInstallState::WouldInstall => "not installed (would install)".into(),
        OrganizationInstallState::InstallFailed => "installation failed".into(),
    }
}

fn write_organization(out: &mut dyn Write, report: &OrganizationReport) -> std::io::Result<()> {
    let org = &report.organization;
    match org.name.as_deref().filter(|n| !n.is_empty()) {
        Some(name) => writeln!(out, "  Organization {} ({})", org.login, name)?,
        None => writeln!(out, "  Organization {}", org.login)?,
    }
    if let Some(description) = org.description.as_deref().filter(|d| !d.is_empty()) {
        writeln!(out, "    Description: {}", description)?;
    }

    let counts = &report.repositories;
    writeln!(
        out,
        "    Repositories: {} (public {}, internal {}, private {})",
        counts.total, counts.public, counts.internal, counts.private
    )?;
    writeln!(out, "    App: {}", install_state_label(report.install_state))?;

    let logins: Vec<_> = report.members.iter().map(|m| m.login.as_str()).collect();
    if logins.is_empty() {
        writeln!(out, "    Members (0)")?;
    } else {
        writeln!(out, "    Members ({}): {}", logins.len(), logins.join(", "))?;
    }

    CliOutput::notices(out, 4, &report.notices)
}

fn write_installations(
    out: &mut dyn Write,
    title: &str,
    installations: &[InstallationReport],
) -> std::io::Result<()> {
    writeln!(out, "== {} ({}) ==", title, installations.len())?;
    for installation in installations {
        CliOutput::installation_header(out, &installation.installation)?;
        for organization in &installation.organizations {
            write_organization(out, organization)?;
        }
        CliOutput::notices(out, 2, &installation.notices)?;
    }

    Ok(())
}

#[async_trait]
impl Command for EnterpriseReportCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let build_report: &dyn BuildEnterpriseReportInterface = ctx.core_module.resolve_ref();
        let report = build_report
            .run(&ctx.as_core_context(), !self.no_install)
            .await?;

        let mut out = ctx.writer.write().await;
        CliOutput::app_header(&mut *out, &report.app)?;
        write_installations(
            &mut *out,
            "Enterprise installations",
            &report.enterprise_installations,
        )?;
        write_installations(
            &mut *out,
            "Organization installations",
            &report.organization_installations,
        )?;

        let stats = &report.statistics;
        writeln!(out, "== Statistics ==")?;
        writeln!(out, "Total organizations: {}", stats.total_organizations)?;
        writeln!(out, "Already installed: {}", stats.already_installed)?;
        writeln!(out, "Newly installed: {}", stats.newly_installed)?;
        writeln!(out, "Failed installations: {}", stats.failed_installations)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use appscout_core::{
        notices::Notice,
        use_cases::{
            reports::{
                BuildEnterpriseReportInterface, EnterpriseReport, InstallationReport,
                MockBuildEnterpriseReportInterface, OrganizationInstallState,
                OrganizationReport, ReportStatistics,
            },
            repositories::RepositoryCounts,
        },
        CoreModule,
    };
    use appscout_ghapi_interface::types::{
        GhAccount, GhAccountType, GhApp, GhInstallation, GhMember, GhOrganization,
    };
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, CommandContextTest};

    fn sample_report(state: OrganizationInstallState) -> EnterpriseReport {
        EnterpriseReport {
            app: GhApp {
                slug: Some("scout".into()),
                name: "Scout".into(),
                ..Default::default()
            },
            enterprise_installations: vec![InstallationReport {
                installation: GhInstallation {
                    id: 1,
                    account: GhAccount {
                        slug: Some("acme-corp".into()),
                        account_type: Some(GhAccountType::Enterprise),
                        ..Default::default()
                    },
                    ..Default::default()
                },
                organizations: vec![OrganizationReport {
                    organization: GhOrganization {
                        login: "acme".into(),
                        name: Some("Acme".into()),
                        description: Some("Tools".into()),
                        ..Default::default()
                    },
                    repositories: RepositoryCounts {
                        public: 1,
                        internal: 2,
                        private: 3,
                        total: 6,
                    },
                    install_state: state,
                    members: vec![
                        GhMember {
                            login: "alice".into(),
                            ..Default::default()
                        },
                        GhMember {
                            login: "bob".into(),
                            ..Default::default()
                        },
                    ],
                    notices: vec![],
                }],
                notices: vec![],
            }],
            organization_installations: vec![InstallationReport {
                installation: GhInstallation {
                    id: 2,
                    account: GhAccount {
                        login: Some("beta".into()),
                        account_type: Some(GhAccountType::Organization),
                        ..Default::default()
                    },
                    ..Default::default()
                },
                organizations: vec![OrganizationReport {
                    organization: GhOrganization {
                        login: "beta".into(),
                        ..Default::default()
                    },
                    repositories: RepositoryCounts::default(),
                    install_state: OrganizationInstallState::AlreadyInstalled,
                    members: vec![],
                    notices: vec![Notice::warning(
                        "Access denied to list members for beta (insufficient permissions)",
                    )],
                }],
                notices: vec![],
            }],
            statistics: ReportStatistics {
                total_organizations: 2,
                already_installed: 1,
                newly_installed: 1,
                failed_installations: 0,
            },
        }
    }

    fn context_with(auto_install: bool, state: OrganizationInstallState) -> CommandContextTest {
        let mut build_report = MockBuildEnterpriseReportInterface::new();
        build_report
            .expect_run()
            .once()
            .withf(move |_, install| *install == auto_install)
            .return_once(move |_, _| Ok(sample_report(state)));

        let mut ctx = CommandContextTest::new();
        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn BuildEnterpriseReportInterface>(Box::new(build_report))
            .build();
        ctx
    }

    #[tokio::test]
    async fn run() -> Result<(), Box<dyn Error>> {
        let ctx = context_with(
            true,
            OrganizationInstallState::NewlyInstalled {
                installation_id: 77,
            },
        );

        assert_eq!(
            test_command(ctx, &["enterprise", "report"]).await,
            concat!(
                "App: Scout (scout)\n",
                "== Enterprise installations (1) ==\n",
                "Installation 1 on acme-corp (Enterprise)\n",
                "  Organization acme (Acme)\n",
                "    Description: Tools\n",
                "    Repositories: 6 (public 1, internal 2, private 3)\n",
                "    App: newly installed (installation 77)\n",
                "    Members (2): alice, bob\n",
                "== Organization installations (1) ==\n",
                "Installation 2 on beta (Organization)\n",
                "  Organization beta\n",
                "    Repositories: 0 (public 0, internal 0, private 0)\n",
                "    App: already installed\n",
                "    Members (0)\n",
                "    WARNING: Access denied to list members for beta (insufficient permissions)\n",
                "== Statistics ==\n",
                "Total organizations: 2\n",
                "Already installed: 1\n",
                "Newly installed: 1\n",
                "Failed installations: 0\n",
            )
        );

        Ok(())
    }

    #[tokio::test]
    async fn run_without_install() -> Result<(), Box<dyn Error>> {
        let ctx = context_with(false, OrganizationInstallState::WouldInstall);

        let output = test_command(ctx, &["enterprise", "report", "--no-install"]).await;
        assert!(output.contains("    App: not installed (would install)\n"));

        Ok(())
    }
}
