use appscout_ghapi_interface::types::{GhNewRepository, GhRepository};
use async_trait::async_trait;
use shaku::{Component, HasComponent, Interface};

use crate::{
    use_cases::installations::CreateInstallationTokenInterface, CoreContext, DomainError, Result,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CreateOrganizationRepositoryInterface: Interface {
    /// Create a repository, with a token minted for `installation_id`,
    /// or with the configured personal token.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        org: &str,
        repository: GhNewRepository,
        installation_id: Option<u64>,
    ) -> Result<GhRepository>;
}

#[derive(Component)]
#[shaku(interface = CreateOrganizationRepositoryInterface)]
pub(crate) struct CreateOrganizationRepository;

#[async_trait]
impl CreateOrganizationRepositoryInterface for CreateOrganizationRepository {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        org: &str,
        repository: GhNewRepository,
        installation_id: Option<u64>,
    ) -> Result<GhRepository> {
        let token = match installation_id {
            Some(id) => {
                let create_token: &dyn CreateInstallationTokenInterface =
                    ctx.core_module.resolve_ref();
                create_token.run(ctx, id).await?.token
            }
            None if !ctx.config.api.github.token.is_empty() => ctx.config.api.github.token.clone(),
            None => return Err(DomainError::MissingAccessToken),
        };

        let created = ctx
            .installation_client(&token)
            .create_repository(org, &repository)
            .await?;

        tracing::info!(full_name = %created.full_name, "Created repository");
        Ok(created)
    }
}
