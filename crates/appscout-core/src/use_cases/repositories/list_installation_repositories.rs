use appscout_ghapi_interface::types::GhRepository;
use async_trait::async_trait;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ListInstallationRepositoriesInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, token: &str) -> Result<Vec<GhRepository>>;
}

#[derive(Component)]
#[shaku(interface = ListInstallationRepositoriesInterface)]
pub(crate) struct ListInstallationRepositories;

#[async_trait]
impl ListInstallationRepositoriesInterface for ListInstallationRepositories {
    #[tracing::instrument(skip_all)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, token: &str) -> Result<Vec<GhRepository>> {
        ctx.installation_client(token)
            .installation_repositories()
            .await
            .map_err(Into::into)
    }
}
