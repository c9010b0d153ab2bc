use std::collections::HashSet;

use appscout_ghapi_interface::types::{
    GhApp, GhInstallation, GhInstallationToken, GhRepository, GhRepositorySelection,
};
use async_trait::async_trait;
use shaku::{Component, HasComponent, Interface};

use crate::{
    notices::Notice,
    use_cases::{
        installations::{
            CreateInstallationTokenInterface, DescribeInstallationInterface,
            GetAuthenticatedAppInterface, ListInstallationsInterface,
        },
        repositories::{
            ListInstallationRepositoriesInterface, ListOrganizationRepositoriesInterface,
        },
    },
    CoreContext, Result,
};

/// Repositories seen through only one of the two listing paths, by full name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessComparison {
    pub installation_only: Vec<GhRepository>,
    pub org_only: Vec<GhRepository>,
}

impl AccessComparison {
    pub fn compare(installation_repos: &[GhRepository], org_repos: &[GhRepository]) -> Self {
        let installation_names: HashSet<&str> = installation_repos
            .iter()
            .map(|r| r.full_name.as_str())
            .collect();
        let org_names: HashSet<&str> = org_repos.iter().map(|r| r.full_name.as_str()).collect();

        Self {
            installation_only: installation_repos
                .iter()
                .filter(|r| !org_names.contains(r.full_name.as_str()))
                .cloned()
                .collect(),
            org_only: org_repos
                .iter()
                .filter(|r| !installation_names.contains(r.full_name.as_str()))
                .cloned()
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallationAudit {
    /// Installation, as described by `GET /app/installations/{id}`.
    pub installation: GhInstallation,
    pub token: GhInstallationToken,
    pub installation_repositories: Vec<GhRepository>,
    pub organization_repositories: Vec<GhRepository>,
    pub comparison: AccessComparison,
    pub notices: Vec<Notice>,
}

impl InstallationAudit {
    /// A `selected` installation whose organization shows more repositories.
    pub fn has_potential_issue(&self) -> bool {
        self.installation.repository_selection == GhRepositorySelection::Selected
            && !self.comparison.org_only.is_empty()
    }

    /// Internal repositories reachable through the organization API but not granted.
    pub fn critical_repositories(&self) -> Vec<&GhRepository> {
        if !self.has_potential_issue() {
            return vec![];
        }

        self.comparison
            .org_only
            .iter()
            .filter(|r| r.is_internal())
            .collect()
    }

    pub fn internal_via_installation(&self) -> Vec<&GhRepository> {
        self.installation_repositories
            .iter()
            .filter(|r| r.is_internal())
            .collect()
    }

    pub fn internal_via_organization(&self) -> Vec<&GhRepository> {
        self.organization_repositories
            .iter()
            .filter(|r| r.is_internal())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryAccessAudit {
    pub app: GhApp,
    pub installations: Vec<InstallationAudit>,
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait AuditRepositoryAccessInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<RepositoryAccessAudit>;
}

#[derive(Component)]
#[shaku(interface = AuditRepositoryAccessInterface)]
pub(crate) struct AuditRepositoryAccess;

#[async_trait]
impl AuditRepositoryAccessInterface for AuditRepositoryAccess {
    #[tracing::instrument(skip_all)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<RepositoryAccessAudit> {
        let get_app: &dyn GetAuthenticatedAppInterface = ctx.core_module.resolve_ref();
        let list_installations: &dyn ListInstallationsInterface = ctx.core_module.resolve_ref();
        let create_token: &dyn CreateInstallationTokenInterface = ctx.core_module.resolve_ref();
        let describe: &dyn DescribeInstallationInterface = ctx.core_module.resolve_ref();
        let list_installation_repos: &dyn ListInstallationRepositoriesInterface =
            ctx.core_module.resolve_ref();
        let list_org_repos: &dyn ListOrganizationRepositoriesInterface =
            ctx.core_module.resolve_ref();

        let app = get_app.run(ctx).await?;
        let mut audits = vec![];

        for summary in list_installations.run(ctx).await? {
            let token = create_token.run(ctx, summary.id).await?;
            let installation = describe.run(ctx, summary.id).await?;
            let installation_repositories = list_installation_repos.run(ctx, &token.token).await?;
            let mut notices = vec![];

            let organization_repositories = match installation.account.identifier() {
                Some(org) => match list_org_repos.run(ctx, &token.token, org).await {
                    Ok(repos) => repos,
                    Err(e) => {
                        notices.push(Notice::warning(format!(
                            "Could not access repositories of {org} through the organization API, the app may lack organization permissions: {e}"
                        )));
                        vec![]
                    }
                },
                None => {
                    notices.push(Notice::warning(format!(
                        "Installation {} has no account login, skipping organization access",
                        installation.id
                    )));
                    vec![]
                }
            };

            let comparison =
                AccessComparison::compare(&installation_repositories, &organization_repositories);

            let audit = InstallationAudit {
                installation,
                token,
                installation_repositories,
                organization_repositories,
                comparison,
                notices,
            };

            if audit.has_potential_issue() {
                tracing::warn!(
                    installation_id = audit.installation.id,
                    org_only = audit.comparison.org_only.len(),
                    critical = audit.critical_repositories().len(),
                    "Organization API shows repositories the installation was not granted"
                );
            }

            audits.push(audit);
        }

        Ok(RepositoryAccessAudit {
            app,
            installations: audits,
        })
    }
}
