use serde::{Deserialize, Serialize};

/// Which repositories an installation can reach.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhRepositorySelection {
    /// Every repository of the account.
    #[default]
    All,
    /// An explicit list.
    Selected,
}

serde_plain::derive_display_from_serialize!(GhRepositorySelection);
