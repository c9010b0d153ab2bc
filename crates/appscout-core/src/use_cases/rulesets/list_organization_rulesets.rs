use appscout_ghapi_interface::types::GhRuleset;
use async_trait::async_trait;
use shaku::{Component, HasComponent, Interface};

use crate::{use_cases::installations::CreateInstallationTokenInterface, CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ListOrganizationRulesetsInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        installation_id: u64,
        org: &str,
    ) -> Result<Vec<GhRuleset>>;
}

#[derive(Component)]
#[shaku(interface = ListOrganizationRulesetsInterface)]
pub(crate) struct ListOrganizationRulesets;

#[async_trait]
impl ListOrganizationRulesetsInterface for ListOrganizationRulesets {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        installation_id: u64,
        org: &str,
    ) -> Result<Vec<GhRuleset>> {
        let create_token: &dyn CreateInstallationTokenInterface = ctx.core_module.resolve_ref();
        let token = create_token.run(ctx, installation_id).await?;

        ctx.installation_client(&token.token)
            .organization_rulesets(org)
            .await
            .map_err(Into::into)
    }
}
