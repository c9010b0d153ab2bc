use appscout_ghapi_interface::types::GhInstallation;
use async_trait::async_trait;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait DescribeInstallationInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, installation_id: u64)
        -> Result<GhInstallation>;
}

#[derive(Component)]
#[shaku(interface = DescribeInstallationInterface)]
pub(crate) struct DescribeInstallation;

#[async_trait]
impl DescribeInstallationInterface for DescribeInstallation {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        installation_id: u64,
    ) -> Result<GhInstallation> {
        ctx.api_service
            .app_installation_get(installation_id)
            .await
            .map_err(Into::into)
    }
}
