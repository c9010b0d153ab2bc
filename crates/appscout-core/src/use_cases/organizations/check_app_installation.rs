use async_trait::async_trait;
use shaku::{Component, Interface};

use crate::{
    notices::{Notice, Noted},
    CoreContext,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppInstallationStatus {
    Installed { installation_id: u64 },
    NotInstalled,
}

impl AppInstallationStatus {
    pub fn is_installed(&self) -> bool {
        matches!(self, Self::Installed { .. })
    }
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CheckAppInstallationInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        token: &str,
        org: &str,
    ) -> Noted<AppInstallationStatus>;
}

#[derive(Component)]
#[shaku(interface = CheckAppInstallationInterface)]
pub(crate) struct CheckAppInstallation;

#[async_trait]
impl CheckAppInstallationInterface for CheckAppInstallation {
    #[tracing::instrument(skip(self, ctx, token))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        token: &str,
        org: &str,
    ) -> Noted<AppInstallationStatus> {
        match ctx
            .installation_client(token)
            .organization_installation(org)
            .await
        {
            Ok(installation) => Noted::clean(AppInstallationStatus::Installed {
                installation_id: installation.id,
            }),
            Err(e) if e.is_not_found() => Noted::clean(AppInstallationStatus::NotInstalled),
            Err(e) => Noted::with_notice(
                AppInstallationStatus::NotInstalled,
                Notice::error(format!("Could not check app installation in {org}: {e}")),
            ),
        }
    }
}
