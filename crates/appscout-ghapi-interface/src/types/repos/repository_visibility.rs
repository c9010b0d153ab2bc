use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Repository visibility.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GhRepositoryVisibility {
    /// Public.
    Public,
    /// Private.
    Private,
    /// Internal (enterprise-wide).
    Internal,
}

serde_plain::derive_display_from_serialize!(GhRepositoryVisibility);

impl FromStr for GhRepositoryVisibility {
    type Err = serde_plain::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_plain::from_str(&s.to_lowercase())
    }
}
