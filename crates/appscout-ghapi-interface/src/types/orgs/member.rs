use serde::{Deserialize, Serialize};

use crate::types::GhAccountType;

/// Organization member.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhMember {
    /// ID.
    pub id: u64,
    /// Login.
    pub login: String,
    /// Account type.
    #[serde(rename = "type", default)]
    pub member_type: GhAccountType,
}
