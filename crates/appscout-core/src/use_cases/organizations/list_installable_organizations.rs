use appscout_ghapi_interface::types::GhOrganization;
use async_trait::async_trait;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ListInstallableOrganizationsInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        token: &str,
        enterprise: &str,
    ) -> Result<Vec<GhOrganization>>;
}

#[derive(Component)]
#[shaku(interface = ListInstallableOrganizationsInterface)]
pub(crate) struct ListInstallableOrganizations;

#[async_trait]
impl ListInstallableOrganizationsInterface for ListInstallableOrganizations {
    #[tracing::instrument(skip(self, ctx, token))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        token: &str,
        enterprise: &str,
    ) -> Result<Vec<GhOrganization>> {
        let orgs = ctx
            .installation_client(token)
            .installable_organizations(enterprise)
            .await?;

        tracing::info!(count = orgs.len(), "Listed installable organizations");
        Ok(orgs)
    }
}
