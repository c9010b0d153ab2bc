use appscout_ghapi_interface::types::GhInstallationToken;
use async_trait::async_trait;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CreateInstallationTokenInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        installation_id: u64,
    ) -> Result<GhInstallationToken>;
}

#[derive(Component)]
#[shaku(interface = CreateInstallationTokenInterface)]
pub(crate) struct CreateInstallationToken;

#[async_trait]
impl CreateInstallationTokenInterface for CreateInstallationToken {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        installation_id: u64,
    ) -> Result<GhInstallationToken> {
        let token = ctx
            .api_service
            .app_installation_token_create(installation_id)
            .await?;

        tracing::info!(
            installation_id = installation_id,
            expires_at = %token.expires_at,
            "Created installation access token"
        );

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::CoreContextTest;

    #[tokio::test]
    async fn run() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_app_installation_token_create()
            .once()
            .withf(|id| *id == 42)
            .returning(|_| Ok(GhInstallationToken::from_raw("ghs_abcdef")));

        let token = CreateInstallationToken
            .run(&ctx.as_context(), 42)
            .await
            .unwrap();
        assert_eq!(token.token, "ghs_abcdef");
    }
}
