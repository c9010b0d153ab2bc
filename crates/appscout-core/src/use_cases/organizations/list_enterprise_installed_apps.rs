use appscout_ghapi_interface::types::GhInstalledApp;
use async_trait::async_trait;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ListEnterpriseInstalledAppsInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        token: &str,
        enterprise: &str,
        org: &str,
    ) -> Result<Vec<GhInstalledApp>>;
}

#[derive(Component)]
#[shaku(interface = ListEnterpriseInstalledAppsInterface)]
pub(crate) struct ListEnterpriseInstalledApps;

#[async_trait]
impl ListEnterpriseInstalledAppsInterface for ListEnterpriseInstalledApps {
    #[tracing::instrument(skip(self, ctx, token))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        token: &str,
        enterprise: &str,
        org: &str,
    ) -> Result<Vec<GhInstalledApp>> {
        ctx.installation_client(token)
            .organization_installed_apps(enterprise, org)
            .await
            .map_err(Into::into)
    }
}
