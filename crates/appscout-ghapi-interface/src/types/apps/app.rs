use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use time::OffsetDateTime;

use crate::types::GhAccount;

/// GitHub App.
#[derive(Debug, Deserialize, Serialize, Clone, SmartDefault, PartialEq, Eq)]
pub struct GhApp {
    /// ID.
    pub id: u64,
    /// Slug.
    pub slug: Option<String>,
    /// Client ID.
    pub client_id: Option<String>,
    /// Name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Owner.
    pub owner: Option<GhAccount>,
    /// Public page.
    pub html_url: Option<String>,
    /// Created at.
    #[default(OffsetDateTime::UNIX_EPOCH)]
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Requested permissions.
    #[serde(default)]
    pub permissions: BTreeMap<String, String>,
    /// Subscribed events.
    #[serde(default)]
    pub events: Vec<String>,
}

impl GhApp {
    /// Slug used by `GET /apps/{app_slug}`, derived from the name when missing.
    pub fn lookup_slug(&self) -> String {
        self.slug.clone().unwrap_or_else(|| {
            self.name
                .to_lowercase()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("-")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize() {
        let app: GhApp = serde_json::from_str(
            r#"{
                "id": 1,
                "slug": "octoapp",
                "client_id": "Iv1.ab1112de889e1c7c",
                "node_id": "MDExOkludGVncmF0aW9uMQ==",
                "owner": {"login": "github", "id": 1, "type": "Organization"},
                "name": "Octocat App",
                "description": "",
                "html_url": "https://github.com/apps/octoapp",
                "created_at": "2017-07-08T16:18:44-04:00",
                "updated_at": "2017-07-08T16:18:44-04:00",
                "permissions": {"metadata": "read", "contents": "read"},
                "events": ["push", "pull_request"]
            }"#,
        )
        .unwrap();

        assert_eq!(app.id, 1);
        assert_eq!(app.lookup_slug(), "octoapp");
        assert_eq!(app.owner.unwrap().identifier(), Some("github"));
        assert_eq!(app.permissions.get("contents").map(String::as_str), Some("read"));
        assert_eq!(app.events.len(), 2);
    }

    #[test]
    fn lookup_slug_from_name() {
        let app = GhApp {
            name: "My Fancy  App".into(),
            ..Default::default()
        };
        assert_eq!(app.lookup_slug(), "my-fancy-app");
    }
}
