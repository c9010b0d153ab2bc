use appscout_ghapi_interface::types::GhApp;
use async_trait::async_trait;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait GetAuthenticatedAppInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<GhApp>;
}

#[derive(Component)]
#[shaku(interface = GetAuthenticatedAppInterface)]
pub(crate) struct GetAuthenticatedApp;

#[async_trait]
impl GetAuthenticatedAppInterface for GetAuthenticatedApp {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<GhApp> {
        ctx.api_service.app_get().await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::CoreContextTest;

    #[tokio::test]
    async fn run() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service.expect_app_get().once().returning(|| {
            Ok(GhApp {
                id: 1,
                name: "Scout".into(),
                ..Default::default()
            })
        });

        let app = GetAuthenticatedApp.run(&ctx.as_context()).await.unwrap();
        assert_eq!(app.name, "Scout");
    }
}
