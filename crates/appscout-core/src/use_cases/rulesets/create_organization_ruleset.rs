use appscout_ghapi_interface::types::GhRuleset;
use async_trait::async_trait;
use shaku::{Component, HasComponent, Interface};

use crate::{use_cases::installations::CreateInstallationTokenInterface, CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CreateOrganizationRulesetInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        installation_id: u64,
        org: &str,
        ruleset: serde_json::Value,
    ) -> Result<GhRuleset>;
}

#[derive(Component)]
#[shaku(interface = CreateOrganizationRulesetInterface)]
pub(crate) struct CreateOrganizationRuleset;

#[async_trait]
impl CreateOrganizationRulesetInterface for CreateOrganizationRuleset {
    #[tracing::instrument(skip(self, ctx, ruleset))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        installation_id: u64,
        org: &str,
        ruleset: serde_json::Value,
    ) -> Result<GhRuleset> {
        let create_token: &dyn CreateInstallationTokenInterface = ctx.core_module.resolve_ref();
        let token = create_token.run(ctx, installation_id).await?;

        let created = ctx
            .installation_client(&token.token)
            .create_ruleset(org, &ruleset)
            .await?;

        tracing::info!(id = created.id, name = %created.name, "Created ruleset");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use appscout_ghapi_interface::types::GhInstallationToken;
    use serde_json::json;

    use super::*;
    use crate::{
        context::tests::CoreContextTest,
        use_cases::installations::MockCreateInstallationTokenInterface, CoreModule,
    };

    #[tokio::test]
    async fn run() {
        let mut ctx = CoreContextTest::new();
        let mut create_token = MockCreateInstallationTokenInterface::new();
        create_token
            .expect_run()
            .once()
            .return_once(|_, _| Ok(GhInstallationToken::from_raw("ghs_minted")));
        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn CreateInstallationTokenInterface>(Box::new(
                create_token,
            ))
            .build();

        ctx.api_service
            .expect_orgs_rulesets_create()
            .once()
            .withf(|token, org, body| {
                token == "ghs_minted" && org == "acme" && body["name"] == "main protection"
            })
            .returning(|_, _, body| {
                Ok(GhRuleset {
                    id: 9,
                    name: body["name"].as_str().unwrap_or_default().into(),
                    enforcement: body["enforcement"].as_str().unwrap_or_default().into(),
                    ..Default::default()
                })
            });

        let created = CreateOrganizationRuleset
            .run(
                &ctx.as_context(),
                42,
                "acme",
                json!({"name": "main protection", "target": "branch", "enforcement": "active"}),
            )
            .await
            .unwrap();

        assert_eq!(created.id, 9);
        assert_eq!(created.enforcement, "active");
    }
}
