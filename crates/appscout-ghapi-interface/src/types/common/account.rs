use serde::{Deserialize, Serialize};

use super::GhAccountType;

/// GitHub account owning an installation or an app.
///
/// Enterprises expose a `slug` and may omit `login`.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhAccount {
    /// ID.
    #[serde(default)]
    pub id: u64,
    /// Login.
    pub login: Option<String>,
    /// Slug.
    pub slug: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Account type.
    #[serde(rename = "type")]
    pub account_type: Option<GhAccountType>,
}

impl GhAccount {
    /// Identifier usable in API paths: login first, then slug.
    pub fn identifier(&self) -> Option<&str> {
        let non_empty = |s: &&str| !s.is_empty();
        self.login
            .as_deref()
            .filter(non_empty)
            .or_else(|| self.slug.as_deref().filter(non_empty))
    }

    /// Identifier for display purposes.
    pub fn display_name(&self) -> &str {
        self.identifier().unwrap_or("Unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_prefers_login() {
        let account = GhAccount {
            login: Some("my-org".into()),
            slug: Some("my-ent".into()),
            ..Default::default()
        };
        assert_eq!(account.identifier(), Some("my-org"));

        let account = GhAccount {
            slug: Some("my-ent".into()),
            ..Default::default()
        };
        assert_eq!(account.identifier(), Some("my-ent"));

        let account = GhAccount {
            login: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(account.identifier(), None);
        assert_eq!(account.display_name(), "Unknown");
    }

    #[test]
    fn deserialize_enterprise_account() {
        let account: GhAccount = serde_json::from_str(
            r#"{"id": 12, "slug": "acme", "name": "ACME Corp", "html_url": "https://github.com/enterprises/acme"}"#,
        )
        .unwrap();

        assert_eq!(account.identifier(), Some("acme"));
        assert_eq!(account.account_type, None);
    }

    #[test]
    fn deserialize_unknown_type() {
        let account: GhAccount =
            serde_json::from_str(r#"{"id": 1, "login": "x", "type": "Mannequin"}"#).unwrap();
        assert_eq!(account.account_type, Some(GhAccountType::Unknown));
    }
}
