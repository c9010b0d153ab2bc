use appscout_core::use_cases::repositories::CreateOrganizationRepositoryInterface;
use appscout_ghapi_interface::types::{GhNewRepository, GhRepositoryVisibility};
use async_trait::async_trait;
use clap::Parser;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Create a repository in an organization
#[derive(Parser)]
pub(crate) struct RepositoriesCreateCommand {
    /// Organization login
    org: String,
    /// Repository name
    name: String,

    /// Authenticate with a token minted for this installation,
    /// instead of DEMO_GITHUB_TOKEN
    #[arg(long)]
    installation_id: Option<u64>,

    /// Repository description
    #[arg(long)]
    description: Option<String>,

    /// Repository visibility (public, private or internal)
    #[arg(long)]
    visibility: Option<GhRepositoryVisibility>,
}

#[async_trait]
impl Command for RepositoriesCreateCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let create_repository: &dyn CreateOrganizationRepositoryInterface =
            ctx.core_module.resolve_ref();
        let repository = create_repository
            .run(
                &ctx.as_core_context(),
                &self.org,
                GhNewRepository {
                    name: self.name,
                    description: self.description,
                    visibility: self.visibility,
                },
                self.installation_id,
            )
            .await?;

        writeln!(
            ctx.writer.write().await,
            "Repository {} created ({}).",
            repository.full_name,
            repository.effective_visibility()
        )?;

        Ok(())
    }
}
