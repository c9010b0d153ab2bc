use serde::{Deserialize, Serialize};

/// Repository ruleset, summary fields only.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhRuleset {
    /// ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Target (`branch`, `tag`, `push`).
    pub target: Option<String>,
    /// Enforcement (`disabled`, `active`, `evaluate`).
    pub enforcement: String,
    /// Owner of the ruleset.
    pub source: Option<String>,
}
