use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::GhRepositoryVisibility;

/// GitHub Repository.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhRepository {
    /// ID.
    #[serde(default)]
    pub id: u64,
    /// Name.
    pub name: String,
    /// Full name.
    pub full_name: String,
    /// Visibility, absent on older payloads.
    pub visibility: Option<GhRepositoryVisibility>,
    /// Private flag.
    #[serde(default)]
    pub private: bool,
    /// Archived flag.
    #[serde(default)]
    pub archived: bool,
    /// Fork flag.
    #[serde(default)]
    pub fork: bool,
    /// Created at.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    /// Updated at.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl GhRepository {
    /// Visibility, falling back on the private flag.
    pub fn effective_visibility(&self) -> GhRepositoryVisibility {
        match self.visibility {
            Some(v) => v,
            None if self.private => GhRepositoryVisibility::Private,
            None => GhRepositoryVisibility::Public,
        }
    }

    /// Is this an internal repository?
    pub fn is_internal(&self) -> bool {
        self.effective_visibility() == GhRepositoryVisibility::Internal
    }
}
