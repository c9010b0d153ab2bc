use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use time::OffsetDateTime;

use super::GhRepositorySelection;
use crate::types::{GhAccount, GhAccountType};

/// GitHub App installation.
#[derive(Debug, Deserialize, Serialize, Clone, SmartDefault, PartialEq, Eq)]
pub struct GhInstallation {
    /// ID.
    pub id: u64,
    /// Account the app is installed on.
    pub account: GhAccount,
    /// Repository selection.
    #[serde(default)]
    pub repository_selection: GhRepositorySelection,
    /// Target type (e.g. `Organization`, `Enterprise`).
    pub target_type: Option<String>,
    /// App ID.
    pub app_id: Option<u64>,
    /// App slug.
    pub app_slug: Option<String>,
    /// App client ID.
    pub client_id: Option<String>,
    /// Granted permissions.
    #[serde(default)]
    pub permissions: BTreeMap<String, String>,
    /// Created at.
    #[default(OffsetDateTime::UNIX_EPOCH)]
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl GhInstallation {
    /// Kind of target, from the account type or the installation target type.
    pub fn target_kind(&self) -> GhAccountType {
        match self.account.account_type {
            Some(kind) if kind != GhAccountType::Unknown => kind,
            _ => self
                .target_type
                .as_deref()
                .and_then(|t| serde_plain::from_str(t).ok())
                .unwrap_or_default(),
        }
    }
}
