use appscout_ghapi_interface::types::{GhApp, GhInstallation, GhInstallationToken, GhRepository};
use async_trait::async_trait;
use shaku::{Component, HasComponent, Interface};

use crate::{
    notices::Notice,
    use_cases::{
        installations::{
            CreateInstallationTokenInterface, GetAuthenticatedAppInterface,
            ListInstallationsInterface,
        },
        repositories::ListOrganizationRepositoriesInterface,
    },
    CoreContext, Result,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallationRepositories {
    pub installation: GhInstallation,
    pub token: GhInstallationToken,
    pub repositories: Vec<GhRepository>,
    /// App as seen with the installation token.
    pub app: Option<GhApp>,
    pub notices: Vec<Notice>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryInventory {
    pub app: GhApp,
    pub installations: Vec<InstallationRepositories>,
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait BuildRepositoryInventoryInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, lookup_app: bool)
        -> Result<RepositoryInventory>;
}

#[derive(Component)]
#[shaku(interface = BuildRepositoryInventoryInterface)]
pub(crate) struct BuildRepositoryInventory;

#[async_trait]
impl BuildRepositoryInventoryInterface for BuildRepositoryInventory {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        lookup_app: bool,
    ) -> Result<RepositoryInventory> {
        let get_app: &dyn GetAuthenticatedAppInterface = ctx.core_module.resolve_ref();
        let list_installations: &dyn ListInstallationsInterface = ctx.core_module.resolve_ref();
        let create_token: &dyn CreateInstallationTokenInterface = ctx.core_module.resolve_ref();
        let list_repos: &dyn ListOrganizationRepositoriesInterface =
            ctx.core_module.resolve_ref();

        let app = get_app.run(ctx).await?;
        let mut entries = vec![];

        for installation in list_installations.run(ctx).await? {
            let token = create_token.run(ctx, installation.id).await?;
            let mut notices = vec![];

            let repositories = match installation.account.identifier() {
                Some(org) => list_repos.run(ctx, &token.token, org).await?,
                None => {
                    notices.push(Notice::error(format!(
                        "Installation {} has no account login, skipping repositories",
                        installation.id
                    )));
                    vec![]
                }
            };

            let installed_app = if lookup_app {
                match ctx
                    .installation_client(&token.token)
                    .app_by_slug(&app.lookup_slug())
                    .await
                {
                    Ok(found) => Some(found),
                    Err(e) => {
                        notices.push(Notice::warning(format!(
                            "Could not look up app {}: {e}",
                            app.lookup_slug()
                        )));
                        None
                    }
                }
            } else {
                None
            };

            entries.push(InstallationRepositories {
                installation,
                token,
                repositories,
                app: installed_app,
                notices,
            });
        }

        Ok(RepositoryInventory {
            app,
            installations: entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use appscout_ghapi_interface::types::GhAccount;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        context::tests::CoreContextTest,
        use_cases::{
            installations::{
                MockCreateInstallationTokenInterface, MockGetAuthenticatedAppInterface,
                MockListInstallationsInterface,
            },
            repositories::MockListOrganizationRepositoriesInterface,
        },
        CoreModule,
    };

    fn arrange(ctx: &mut CoreContextTest) {
        let mut get_app = MockGetAuthenticatedAppInterface::new();
        get_app.expect_run().return_once(|_| {
            Ok(GhApp {
                id: 1,
                slug: Some("scout".into()),
                name: "Scout".into(),
                ..Default::default()
            })
        });

        let mut list_installations = MockListInstallationsInterface::new();
        list_installations.expect_run().return_once(|_| {
            Ok(vec![
                GhInstallation {
                    id: 10,
                    account: GhAccount {
                        login: Some("acme".into()),
                        ..Default::default()
                    },
                    ..Default::default()
                },
                GhInstallation {
                    id: 11,
                    ..Default::default()
                },
            ])
        });

        let mut create_token = MockCreateInstallationTokenInterface::new();
        create_token
            .expect_run()
            .times(2)
            .returning(|_, id| Ok(GhInstallationToken::from_raw(format!("ghs_{id}"))));

        let mut list_repos = MockListOrganizationRepositoriesInterface::new();
        list_repos
            .expect_run()
            .once()
            .withf(|_, token, org| token == "ghs_10" && org == "acme")
            .return_once(|_, _, _| {
                Ok(vec![GhRepository {
                    full_name: "acme/api".into(),
                    ..Default::default()
                }])
            });

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn GetAuthenticatedAppInterface>(Box::new(get_app))
            .with_component_override::<dyn ListInstallationsInterface>(Box::new(
                list_installations,
            ))
            .with_component_override::<dyn CreateInstallationTokenInterface>(Box::new(
                create_token,
            ))
            .with_component_override::<dyn ListOrganizationRepositoriesInterface>(Box::new(
                list_repos,
            ))
            .build();
    }

    #[tokio::test]
    async fn inventory_without_lookup() {
        let mut ctx = CoreContextTest::new();
        arrange(&mut ctx);

        let inventory = BuildRepositoryInventory
            .run(&ctx.as_context(), false)
            .await
            .unwrap();

        assert_eq!(inventory.installations.len(), 2);
        assert_eq!(inventory.installations[0].repositories.len(), 1);
        assert_eq!(inventory.installations[0].token.token, "ghs_10");
        assert!(inventory.installations[0].notices.is_empty());
        assert!(inventory.installations[1].repositories.is_empty());
        assert_eq!(inventory.installations[1].notices.len(), 1);
    }

    #[tokio::test]
    async fn inventory_with_lookup() {
        let mut ctx = CoreContextTest::new();
        arrange(&mut ctx);
        ctx.api_service
            .expect_apps_get_by_slug()
            .times(2)
            .withf(|_, slug| slug == "scout")
            .returning(|_, slug| {
                Ok(GhApp {
                    slug: Some(slug.into()),
                    ..Default::default()
                })
            });

        let inventory = BuildRepositoryInventory
            .run(&ctx.as_context(), true)
            .await
            .unwrap();

        assert_eq!(
            inventory.installations[0]
                .app
                .as_ref()
                .and_then(|a| a.slug.as_deref()),
            Some("scout")
        );
    }
}
