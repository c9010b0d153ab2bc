use serde::Serialize;

use super::GhRepositoryVisibility;

/// Body of `POST /orgs/{org}/repos`.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhNewRepository {
    /// Name.
    pub name: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Visibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<GhRepositoryVisibility>,
}
