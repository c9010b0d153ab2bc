use async_trait::async_trait;

use crate::{
    pagination::GhPage,
    types::{
        GhApp, GhInstallation, GhInstallationToken, GhInstalledApp, GhMember, GhNewRepository,
        GhOrganization, GhRepository, GhRepositorySelection, GhRuleset,
    },
    Result,
};

/// GitHub API Adapter interface
///
/// `app_*` methods authenticate as the app itself with a signed JWT.
/// Every other method takes an installation (or personal) access token.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Get the authenticated app.
    async fn app_get(&self) -> Result<GhApp>;
    /// List one page of the app installations.
    async fn app_installations_list(&self, page: GhPage) -> Result<Vec<GhInstallation>>;
    /// Get an installation of the app.
    async fn app_installation_get(&self, installation_id: u64) -> Result<GhInstallation>;
    /// Create an installation access token.
    async fn app_installation_token_create(
        &self,
        installation_id: u64,
    ) -> Result<GhInstallationToken>;

    /// Get a public app from its slug.
    async fn apps_get_by_slug(&self, token: &str, slug: &str) -> Result<GhApp>;

    /// Get an organization.
    async fn orgs_get(&self, token: &str, org: &str) -> Result<GhOrganization>;
    /// Get the installation of the current app on an organization.
    async fn orgs_installation_get(&self, token: &str, org: &str) -> Result<GhInstallation>;
    /// List one page of organization members.
    async fn orgs_members_list(
        &self,
        token: &str,
        org: &str,
        page: GhPage,
    ) -> Result<Vec<GhMember>>;
    /// List one page of organization repositories, of every type.
    async fn orgs_repos_list(
        &self,
        token: &str,
        org: &str,
        page: GhPage,
    ) -> Result<Vec<GhRepository>>;
    /// Create an organization repository.
    async fn orgs_repos_create(
        &self,
        token: &str,
        org: &str,
        repository: &GhNewRepository,
    ) -> Result<GhRepository>;
    /// List one page of organization rulesets.
    async fn orgs_rulesets_list(
        &self,
        token: &str,
        org: &str,
        page: GhPage,
    ) -> Result<Vec<GhRuleset>>;
    /// Create an organization ruleset from a raw JSON body.
    async fn orgs_rulesets_create(
        &self,
        token: &str,
        org: &str,
        ruleset: &serde_json::Value,
    ) -> Result<GhRuleset>;

    /// List one page of repositories accessible to an installation.
    async fn installation_repos_list(&self, token: &str, page: GhPage)
        -> Result<Vec<GhRepository>>;

    /// List one page of organizations the app can be installed on.
    async fn enterprise_installable_orgs_list(
        &self,
        token: &str,
        enterprise: &str,
        page: GhPage,
    ) -> Result<Vec<GhOrganization>>;
    /// List one page of apps installed on an enterprise organization.
    async fn enterprise_org_installations_list(
        &self,
        token: &str,
        enterprise: &str,
        org: &str,
        page: GhPage,
    ) -> Result<Vec<GhInstalledApp>>;
    /// Install an app on an enterprise organization.
    async fn enterprise_org_installation_create(
        &self,
        token: &str,
        enterprise: &str,
        org: &str,
        client_id: &str,
        repository_selection: GhRepositorySelection,
    ) -> Result<GhInstalledApp>;
}
