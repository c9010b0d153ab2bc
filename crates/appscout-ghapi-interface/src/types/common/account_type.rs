use serde::{Deserialize, Serialize};

/// Kind of GitHub account.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
pub enum GhAccountType {
    /// Organization.
    Organization,
    /// Enterprise.
    Enterprise,
    /// User.
    User,
    /// Bot.
    Bot,
    /// Anything GitHub adds later.
    #[default]
    #[serde(other)]
    Unknown,
}

serde_plain::derive_display_from_serialize!(GhAccountType);
