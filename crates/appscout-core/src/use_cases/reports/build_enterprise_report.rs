use appscout_ghapi_interface::types::{
    GhAccountType, GhApp, GhInstallation, GhMember, GhOrganization,
};
use async_trait::async_trait;
use shaku::{Component, HasComponent, Interface};

use crate::{
    notices::Notice,
    use_cases::{
        installations::{
            CreateInstallationTokenInterface, GetAuthenticatedAppInterface,
            ListInstallationsInterface,
        },
        organizations::{
            CheckAppInstallationInterface, GetOrganizationDetailsInterface,
            InstallAppInOrganizationInterface, ListInstallableOrganizationsInterface,
            ListOrganizationMembersInterface,
        },
        repositories::{CountRepositoriesByVisibilityInterface, RepositoryCounts},
    },
    CoreContext, Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrganizationInstallState {
    AlreadyInstalled,
    NewlyInstalled { installation_id: u64 },
    /// Missing, and auto-installation is disabled.
    WouldInstall,
    InstallFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationReport {
    pub organization: GhOrganization,
    pub repositories: RepositoryCounts,
    pub install_state: OrganizationInstallState,
    pub members: Vec<GhMember>,
    pub notices: Vec<Notice>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallationReport {
    pub installation: GhInstallation,
    pub organizations: Vec<OrganizationReport>,
    pub notices: Vec<Notice>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportStatistics {
    pub total_organizations: u64,
    pub already_installed: u64,
    pub newly_installed: u64,
    pub failed_installations: u64,
}

impl ReportStatistics {
    fn record(&mut self, state: OrganizationInstallState) {
        match state {
            OrganizationInstallState::AlreadyInstalled => self.already_installed += 1,
            OrganizationInstallState::NewlyInstalled { .. } => self.newly_installed += 1,
            OrganizationInstallState::InstallFailed => self.failed_installations += 1,
            OrganizationInstallState::WouldInstall => (),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnterpriseReport {
    pub app: GhApp,
    pub enterprise_installations: Vec<InstallationReport>,
    pub organization_installations: Vec<InstallationReport>,
    pub statistics: ReportStatistics,
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait BuildEnterpriseReportInterface: Interface {
    /// Report enterprise organizations and members, installing the app
    /// where it is missing when `auto_install` is set.
    async fn run<'a>(&self, ctx: &CoreContext<'a>, auto_install: bool)
        -> Result<EnterpriseReport>;
}

#[derive(Component)]
#[shaku(interface = BuildEnterpriseReportInterface)]
pub(crate) struct BuildEnterpriseReport;

impl BuildEnterpriseReport {
    async fn enterprise_installation<'a>(
        ctx: &CoreContext<'a>,
        installation: GhInstallation,
        client_id: &str,
        auto_install: bool,
        statistics: &mut ReportStatistics,
    ) -> Result<InstallationReport> {
        let mut report = InstallationReport {
            installation,
            organizations: vec![],
            notices: vec![],
        };

        let Some(enterprise) = report.installation.account.identifier().map(str::to_owned) else {
            report.notices.push(Notice::error(format!(
                "Cannot determine enterprise identifier for installation {}",
                report.installation.id
            )));
            return Ok(report);
        };

        let create_token: &dyn CreateInstallationTokenInterface = ctx.core_module.resolve_ref();
        let list_orgs: &dyn ListInstallableOrganizationsInterface = ctx.core_module.resolve_ref();
        let count_repos: &dyn CountRepositoriesByVisibilityInterface =
            ctx.core_module.resolve_ref();
        let check_installation: &dyn CheckAppInstallationInterface =
            ctx.core_module.resolve_ref();
        let install_app: &dyn InstallAppInOrganizationInterface = ctx.core_module.resolve_ref();
        let list_members: &dyn ListOrganizationMembersInterface = ctx.core_module.resolve_ref();

        let token = create_token.run(ctx, report.installation.id).await?.token;
        let orgs = list_orgs.run(ctx, &token, &enterprise).await?;
        statistics.total_organizations += orgs.len() as u64;

        for organization in orgs {
            let org = organization.login.clone();
            let mut notices = vec![];

            let (repositories, mut n) = count_repos.run(ctx, &token, &org).await.into_parts();
            notices.append(&mut n);

            let (status, mut n) = check_installation.run(ctx, &token, &org).await.into_parts();
            notices.append(&mut n);

            let install_state = if status.is_installed() {
                OrganizationInstallState::AlreadyInstalled
            } else if auto_install {
                let (installed, mut n) = install_app
                    .run(ctx, &token, &enterprise, &org, client_id)
                    .await
                    .into_parts();
                notices.append(&mut n);

                match installed {
                    Some(installed) => OrganizationInstallState::NewlyInstalled {
                        installation_id: installed.id,
                    },
                    None => OrganizationInstallState::InstallFailed,
                }
            } else {
                OrganizationInstallState::WouldInstall
            };
            statistics.record(install_state);

            let (members, mut n) = list_members.run(ctx, &token, &org).await.into_parts();
            notices.append(&mut n);

            report.organizations.push(OrganizationReport {
                organization,
                repositories,
                install_state,
                members,
                notices,
            });
        }

        Ok(report)
    }

    async fn organization_installation<'a>(
        ctx: &CoreContext<'a>,
        installation: GhInstallation,
        statistics: &mut ReportStatistics,
    ) -> Result<InstallationReport> {
        let mut report = InstallationReport {
            installation,
            organizations: vec![],
            notices: vec![],
        };

        let Some(org) = report.installation.account.identifier().map(str::to_owned) else {
            report.notices.push(Notice::error(format!(
                "Cannot determine organization login for installation {}",
                report.installation.id
            )));
            return Ok(report);
        };

        let create_token: &dyn CreateInstallationTokenInterface = ctx.core_module.resolve_ref();
        let get_details: &dyn GetOrganizationDetailsInterface = ctx.core_module.resolve_ref();
        let count_repos: &dyn CountRepositoriesByVisibilityInterface =
            ctx.core_module.resolve_ref();
        let list_members: &dyn ListOrganizationMembersInterface = ctx.core_module.resolve_ref();

        statistics.total_organizations += 1;

        let token = create_token.run(ctx, report.installation.id).await?.token;
        let mut notices = vec![];

        let (organization, mut n) = get_details.run(ctx, &token, &org).await.into_parts();
        notices.append(&mut n);

        let (repositories, mut n) = count_repos.run(ctx, &token, &org).await.into_parts();
        notices.append(&mut n);

        // This installation is the app being installed there.
        let install_state = OrganizationInstallState::AlreadyInstalled;
        statistics.record(install_state);

        let (members, mut n) = list_members.run(ctx, &token, &org).await.into_parts();
        notices.append(&mut n);

        report.organizations.push(OrganizationReport {
            organization,
            repositories,
            install_state,
            members,
            notices,
        });

        Ok(report)
    }
}

#[async_trait]
impl BuildEnterpriseReportInterface for BuildEnterpriseReport {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        auto_install: bool,
    ) -> Result<EnterpriseReport> {
        let get_app: &dyn GetAuthenticatedAppInterface = ctx.core_module.resolve_ref();
        let list_installations: &dyn ListInstallationsInterface = ctx.core_module.resolve_ref();

        let app = get_app.run(ctx).await?;
        let client_id = app
            .client_id
            .clone()
            .unwrap_or_else(|| ctx.config.enterprise_app.app_id.clone());

        let (enterprises, organizations): (Vec<_>, Vec<_>) = list_installations
            .run(ctx)
            .await?
            .into_iter()
            .filter(|i| {
                matches!(
                    i.target_kind(),
                    GhAccountType::Enterprise | GhAccountType::Organization
                )
            })
            .partition(|i| i.target_kind() == GhAccountType::Enterprise);

        tracing::info!(
            enterprises = enterprises.len(),
            organizations = organizations.len(),
            "Sorted installations"
        );

        let mut statistics = ReportStatistics::default();
        let mut enterprise_installations = vec![];
        let mut organization_installations = vec![];

        for installation in enterprises {
            enterprise_installations.push(
                Self::enterprise_installation(
                    ctx,
                    installation,
                    &client_id,
                    auto_install,
                    &mut statistics,
                )
                .await?,
            );
        }

        for installation in organizations {
            organization_installations
                .push(Self::organization_installation(ctx, installation, &mut statistics).await?);
        }

        Ok(EnterpriseReport {
            app,
            enterprise_installations,
            organization_installations,
            statistics,
        })
    }
}
