//! Installation-scoped client.

use crate::{
    pagination::collect_pages,
    types::{
        GhApp, GhInstallation, GhInstalledApp, GhMember, GhNewRepository, GhOrganization,
        GhRepository, GhRepositorySelection, GhRuleset,
    },
    ApiService, Result,
};

/// Binds an access token to the API service, and walks through pages.
pub struct InstallationClient<'a> {
    api: &'a (dyn ApiService + 'a),
    token: String,
    per_page: u32,
}

impl<'a> InstallationClient<'a> {
    pub fn new(api: &'a (dyn ApiService + 'a), token: impl Into<String>, per_page: u32) -> Self {
        Self {
            api,
            token: token.into(),
            per_page,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub async fn app_by_slug(&self, slug: &str) -> Result<GhApp> {
        self.api.apps_get_by_slug(&self.token, slug).await
    }

    pub async fn organization(&self, org: &str) -> Result<GhOrganization> {
        self.api.orgs_get(&self.token, org).await
    }

    pub async fn organization_installation(&self, org: &str) -> Result<GhInstallation> {
        self.api.orgs_installation_get(&self.token, org).await
    }

    pub async fn organization_members(&self, org: &str) -> Result<Vec<GhMember>> {
        let (api, token) = (self.api, self.token.as_str());
        collect_pages(self.per_page, move |page| {
            api.orgs_members_list(token, org, page)
        })
        .await
    }

    pub async fn organization_repositories(&self, org: &str) -> Result<Vec<GhRepository>> {
        let (api, token) = (self.api, self.token.as_str());
        collect_pages(self.per_page, move |page| api.orgs_repos_list(token, org, page)).await
    }

    pub async fn create_repository(
        &self,
        org: &str,
        repository: &GhNewRepository,
    ) -> Result<GhRepository> {
        self.api
            .orgs_repos_create(&self.token, org, repository)
            .await
    }

    pub async fn organization_rulesets(&self, org: &str) -> Result<Vec<GhRuleset>> {
        let (api, token) = (self.api, self.token.as_str());
        collect_pages(self.per_page, move |page| {
            api.orgs_rulesets_list(token, org, page)
        })
        .await
    }

    pub async fn create_ruleset(&self, org: &str, ruleset: &serde_json::Value) -> Result<GhRuleset> {
        self.api.orgs_rulesets_create(&self.token, org, ruleset).await
    }

    /// Repositories the installation was granted.
    pub async fn installation_repositories(&self) -> Result<Vec<GhRepository>> {
        let (api, token) = (self.api, self.token.as_str());
        collect_pages(self.per_page, move |page| {
            api.installation_repos_list(token, page)
        })
        .await
    }

    pub async fn installable_organizations(&self, enterprise: &str) -> Result<Vec<GhOrganization>> {
        let (api, token) = (self.api, self.token.as_str());
        collect_pages(self.per_page, move |page| {
            api.enterprise_installable_orgs_list(token, enterprise, page)
        })
        .await
    }

    pub async fn organization_installed_apps(
        &self,
        enterprise: &str,
        org: &str,
    ) -> Result<Vec<GhInstalledApp>> {
        let (api, token) = (self.api, self.token.as_str());
        collect_pages(self.per_page, move |page| {
            api.enterprise_org_installations_list(token, enterprise, org, page)
        })
        .await
    }

    /// Install an app on every repository of an enterprise organization.
    pub async fn install_app(
        &self,
        enterprise: &str,
        org: &str,
        client_id: &str,
    ) -> Result<GhInstalledApp> {
        self.api
            .enterprise_org_installation_create(
                &self.token,
                enterprise,
                org,
                client_id,
                GhRepositorySelection::All,
            )
            .await
    }
}
