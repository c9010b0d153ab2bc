use appscout_ghapi_interface::types::GhRepository;
use async_trait::async_trait;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ListOrganizationRepositoriesInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        token: &str,
        org: &str,
    ) -> Result<Vec<GhRepository>>;
}

#[derive(Component)]
#[shaku(interface = ListOrganizationRepositoriesInterface)]
pub(crate) struct ListOrganizationRepositories;

#[async_trait]
impl ListOrganizationRepositoriesInterface for ListOrganizationRepositories {
    #[tracing::instrument(skip(self, ctx, token))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        token: &str,
        org: &str,
    ) -> Result<Vec<GhRepository>> {
        let repos = ctx
            .installation_client(token)
            .organization_repositories(org)
            .await?;

        tracing::info!(count = repos.len(), "Listed organization repositories");
        Ok(repos)
    }
}
