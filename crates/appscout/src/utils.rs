//! Output helpers shared by commands.

use std::io::Write;

use anyhow::anyhow;
use appscout_config::Config;
use appscout_core::notices::Notice;
use appscout_ghapi_interface::types::{GhApp, GhInstallation, GhInstallationToken};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use crate::Result;

pub(crate) struct CliOutput;

impl CliOutput {
    pub fn date(date: &OffsetDateTime) -> String {
        date.format(&Rfc3339).unwrap_or_else(|_| date.to_string())
    }

    pub fn token(token: &GhInstallationToken, show: bool) -> String {
        if show {
            token.token.clone()
        } else {
            token.masked()
        }
    }

    pub fn app_header(out: &mut dyn Write, app: &GhApp) -> std::io::Result<()> {
        writeln!(out, "App: {} ({})", app.name, app.lookup_slug())
    }

    pub fn installation_header(
        out: &mut dyn Write,
        installation: &GhInstallation,
    ) -> std::io::Result<()> {
        writeln!(
            out,
            "Installation {} on {} ({})",
            installation.id,
            installation.account.display_name(),
            installation.target_kind()
        )
    }

    pub fn notices(out: &mut dyn Write, indent: usize, notices: &[Notice]) -> std::io::Result<()> {
        for notice in notices {
            writeln!(out, "{:indent$}{}", "", notice, indent = indent)?;
        }

        Ok(())
    }
}

/// Installation given on the command line, else `DEMO_GITHUBAPP_INSTALLATIONID`.
pub(crate) fn resolve_installation_id(config: &Config, given: Option<u64>) -> Result<u64> {
    match given {
        Some(id) => Ok(id),
        None if config.demo_installation_id != 0 => Ok(config.demo_installation_id),
        None => Err(anyhow!(
            "No installation ID given, and DEMO_GITHUBAPP_INSTALLATIONID is not set"
        )),
    }
}
