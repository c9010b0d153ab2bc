use serde::{Deserialize, Serialize};

/// GitHub Organization.
///
/// Listing endpoints only fill `id` and `login`, `GET /orgs/{org}` fills the rest.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhOrganization {
    /// ID.
    #[serde(default)]
    pub id: u64,
    /// Login.
    pub login: String,
    /// Display name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Public repositories count.
    pub public_repos: Option<u64>,
    /// Total private repositories count.
    pub total_private_repos: Option<u64>,
    /// Owned private repositories count.
    pub owned_private_repos: Option<u64>,
}
