use appscout_ghapi_interface::types::GhMember;
use async_trait::async_trait;
use shaku::{Component, Interface};

use crate::{
    notices::{Notice, Noted},
    CoreContext,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ListOrganizationMembersInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, token: &str, org: &str)
        -> Noted<Vec<GhMember>>;
}

#[derive(Component)]
#[shaku(interface = ListOrganizationMembersInterface)]
pub(crate) struct ListOrganizationMembers;

#[async_trait]
impl ListOrganizationMembersInterface for ListOrganizationMembers {
    #[tracing::instrument(skip(self, ctx, token))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        token: &str,
        org: &str,
    ) -> Noted<Vec<GhMember>> {
        match ctx.installation_client(token).organization_members(org).await {
            Ok(members) => Noted::clean(members),
            Err(e) if e.is_forbidden() => Noted::with_notice(
                vec![],
                Notice::warning(format!(
                    "Access denied to list members for {org} (insufficient permissions)"
                )),
            ),
            Err(e) if e.is_not_found() => Noted::with_notice(
                vec![],
                Notice::warning(format!("Organization {org} not found or not accessible")),
            ),
            Err(e) => Noted::with_notice(
                vec![],
                Notice::error(format!("Could not list members for {org}: {e}")),
            ),
        }
    }
}
