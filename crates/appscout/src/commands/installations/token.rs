use appscout_core::use_cases::installations::CreateInstallationTokenInterface;
use async_trait::async_trait;
use clap::Parser;
use shaku::HasComponent;
use tokio::io::AsyncWriteExt;

use crate::{
    commands::{Command, CommandContext},
    utils::{resolve_installation_id, CliOutput},
    Result,
};

/// Create an installation access token
#[derive(Parser)]
pub(crate) struct InstallationsTokenCommand {
    /// Installation ID (defaults to DEMO_GITHUBAPP_INSTALLATIONID)
    installation_id: Option<u64>,

    /// Append the token to the GitHub Actions output file, masked from logs
    #[arg(long)]
    github_output: bool,
}

#[async_trait]
impl Command for InstallationsTokenCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let installation_id = resolve_installation_id(&ctx.config, self.installation_id)?;
        if self.github_output && ctx.config.github_output_path.is_empty() {
            anyhow::bail!("--github-output needs the GITHUB_OUTPUT environment variable");
        }

        let create_token: &dyn CreateInstallationTokenInterface = ctx.core_module.resolve_ref();
        let token = create_token
            .run(&ctx.as_core_context(), installation_id)
            .await?;

        if self.github_output {
            let mut file = tokio::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&ctx.config.github_output_path)
                .await?;
            file.write_all(format!("token={}\n", token.token).as_bytes())
                .await?;
            file.flush().await?;

            let mut out = ctx.writer.write().await;
            writeln!(out, "::add-mask::{}", token.token)?;
            writeln!(
                out,
                "Token for installation {} written to GITHUB_OUTPUT (expires {}).",
                installation_id,
                CliOutput::date(&token.expires_at)
            )?;
        } else {
            writeln!(ctx.writer.write().await, "{}", token.token)?;
        }

        Ok(())
    }
}
