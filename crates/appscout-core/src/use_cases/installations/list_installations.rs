use appscout_ghapi_interface::{collect_pages, types::GhInstallation};
use async_trait::async_trait;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ListInstallationsInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<Vec<GhInstallation>>;
}

#[derive(Component)]
#[shaku(interface = ListInstallationsInterface)]
pub(crate) struct ListInstallations;

#[async_trait]
impl ListInstallationsInterface for ListInstallations {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<Vec<GhInstallation>> {
        let api = ctx.api_service;
        let installations = collect_pages(ctx.config.api.github.page_size, move |page| {
            api.app_installations_list(page)
        })
        .await?;

        tracing::info!(count = installations.len(), "Listed installations");
        Ok(installations)
    }
}
