use appscout_ghapi_interface::types::{
    GhAccountType, GhApp, GhInstallation, GhInstalledApp, GhOrganization,
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
            ListEnterpriseInstalledAppsInterface, ListInstallableOrganizationsInterface,
        },
    },
    CoreContext, Result,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationApps {
    pub organization: GhOrganization,
    pub apps: Vec<GhInstalledApp>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnterpriseApps {
    pub installation: GhInstallation,
    pub enterprise: Option<String>,
    pub organizations: Vec<OrganizationApps>,
    pub notices: Vec<Notice>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnterpriseAppInventory {
    pub app: GhApp,
    pub enterprises: Vec<EnterpriseApps>,
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait BuildEnterpriseAppInventoryInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<EnterpriseAppInventory>;
}

#[derive(Component)]
#[shaku(interface = BuildEnterpriseAppInventoryInterface)]
pub(crate) struct BuildEnterpriseAppInventory;

#[async_trait]
impl BuildEnterpriseAppInventoryInterface for BuildEnterpriseAppInventory {
    #[tracing::instrument(skip_all)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<EnterpriseAppInventory> {
        let get_app: &dyn GetAuthenticatedAppInterface = ctx.core_module.resolve_ref();
        let list_installations: &dyn ListInstallationsInterface = ctx.core_module.resolve_ref();
        let create_token: &dyn CreateInstallationTokenInterface = ctx.core_module.resolve_ref();
        let list_orgs: &dyn ListInstallableOrganizationsInterface = ctx.core_module.resolve_ref();
        let list_apps: &dyn ListEnterpriseInstalledAppsInterface = ctx.core_module.resolve_ref();

        let app = get_app.run(ctx).await?;
        let mut enterprises = vec![];

        for installation in list_installations.run(ctx).await? {
            let mut entry = EnterpriseApps {
                enterprise: installation.account.identifier().map(str::to_owned),
                installation,
                organizations: vec![],
                notices: vec![],
            };

            if entry.installation.target_kind() != GhAccountType::Enterprise {
                entry.notices.push(Notice::warning(format!(
                    "Installation {} is not an enterprise installation, skipping",
                    entry.installation.id
                )));
                enterprises.push(entry);
                continue;
            }

            let Some(enterprise) = entry.enterprise.clone() else {
                entry.notices.push(Notice::error(format!(
                    "Cannot determine enterprise identifier for installation {}",
                    entry.installation.id
                )));
                enterprises.push(entry);
                continue;
            };

            let token = create_token.run(ctx, entry.installation.id).await?;
            for organization in list_orgs.run(ctx, &token.token, &enterprise).await? {
                let apps = list_apps
                    .run(ctx, &token.token, &enterprise, &organization.login)
                    .await?;
                entry
                    .organizations
                    .push(OrganizationApps { organization, apps });
            }

            enterprises.push(entry);
        }

        Ok(EnterpriseAppInventory { app, enterprises })
    }
}
