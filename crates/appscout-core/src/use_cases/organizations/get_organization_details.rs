use appscout_ghapi_interface::types::GhOrganization;
use async_trait::async_trait;
use shaku::{Component, Interface};

use crate::{
    notices::{Notice, Noted},
    CoreContext,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait GetOrganizationDetailsInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        token: &str,
        org: &str,
    ) -> Noted<GhOrganization>;
}

#[derive(Component)]
#[shaku(interface = GetOrganizationDetailsInterface)]
pub(crate) struct GetOrganizationDetails;

#[async_trait]
impl GetOrganizationDetailsInterface for GetOrganizationDetails {
    #[tracing::instrument(skip(self, ctx, token))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        token: &str,
        org: &str,
    ) -> Noted<GhOrganization> {
        match ctx.installation_client(token).organization(org).await {
            Ok(details) => Noted::clean(details),
            Err(e) => Noted::with_notice(
                GhOrganization {
                    login: org.into(),
                    ..Default::default()
                },
                Notice::error(format!("Could not get details of organization {org}: {e}")),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use appscout_ghapi_interface::ApiError;

    use super::*;
    use crate::{context::tests::CoreContextTest, notices::NoticeLevel};

    #[tokio::test]
    async fn error_yields_empty_details() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service.expect_orgs_get().once().returning(|_, _| {
            Err(ApiError::HttpStatus {
                status: 500,
                method: "GET".into(),
                url: "/orgs/acme".into(),
                message: "Server Error".into(),
            })
        });

        let result = GetOrganizationDetails
            .run(&ctx.as_context(), "ghs_token", "acme")
            .await;

        assert_eq!(result.value.login, "acme");
        assert_eq!(result.value.public_repos, None);
        assert_eq!(result.notices.len(), 1);
        assert_eq!(result.notices[0].level, NoticeLevel::Error);
    }

    #[tokio::test]
    async fn success() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_orgs_get()
            .once()
            .withf(|token, org| token == "ghs_token" && org == "acme")
            .returning(|_, org| {
                Ok(GhOrganization {
                    login: org.into(),
                    name: Some("ACME".into()),
                    ..Default::default()
                })
            });

        let result = GetOrganizationDetails
            .run(&ctx.as_context(), "ghs_token", "acme")
            .await;

        assert_eq!(result.value.name.as_deref(), Some("ACME"));
        assert!(result.notices.is_empty());
    }
}
