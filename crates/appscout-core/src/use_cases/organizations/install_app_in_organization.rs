use appscout_ghapi_interface::types::GhInstalledApp;
use async_trait::async_trait;
use shaku::{Component, Interface};

use crate::{
    notices::{Notice, Noted},
    CoreContext,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait InstallAppInOrganizationInterface: Interface {
    /// Install the app on every repository of `org`. Only a success yields a value.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        token: &str,
        enterprise: &str,
        org: &str,
        client_id: &str,
    ) -> Noted<Option<GhInstalledApp>>;
}

#[derive(Component)]
#[shaku(interface = InstallAppInOrganizationInterface)]
pub(crate) struct InstallAppInOrganization;

#[async_trait]
impl InstallAppInOrganizationInterface for InstallAppInOrganization {
    #[tracing::instrument(skip(self, ctx, token))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        token: &str,
        enterprise: &str,
        org: &str,
        client_id: &str,
    ) -> Noted<Option<GhInstalledApp>> {
        let result = ctx
            .installation_client(token)
            .install_app(enterprise, org, client_id)
            .await;

        let notice = match result {
            Ok(installed) => {
                tracing::info!(installation_id = installed.id, "Installed app in {}", org);
                return Noted::clean(Some(installed));
            }
            Err(e) if e.is_unprocessable() => Notice::warning(format!(
                "App may already be installed or pending approval in {org}"
            )),
            Err(e) if e.is_forbidden() => Notice::error(format!(
                "Insufficient permissions to install app in {org}"
            )),
            Err(e) if e.is_not_found() => {
                Notice::error(format!("Organization {org} not found or not accessible"))
            }
            Err(e) => Notice::error(format!("Error installing app in {org}: {e}")),
        };

        Noted::with_notice(None, notice)
    }
}
