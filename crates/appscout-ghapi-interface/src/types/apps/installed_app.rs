use serde::{Deserialize, Serialize};

use super::GhRepositorySelection;

/// App installed on an organization, as seen from an enterprise.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhInstalledApp {
    /// Installation ID.
    pub id: u64,
    /// App slug.
    pub app_slug: Option<String>,
    /// App client ID.
    pub client_id: Option<String>,
    /// Repository selection.
    pub repository_selection: Option<GhRepositorySelection>,
}
