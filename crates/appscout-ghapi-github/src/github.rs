use appscout_config::{AppCredentialsConfig, Config};
use appscout_ghapi_interface::{
    types::{
        GhApp, GhInstallation, GhInstallationToken, GhInstalledApp, GhMember, GhNewRepository,
        GhOrganization, GhRepository, GhRepositorySelection, GhRuleset,
    },
    ApiService, GhPage, Result,
};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize};

use crate::{
    auth::{build_github_url, create_app_token, get_anonymous_client_builder, now_timestamp},
    errors::GitHubError,
};

enum Auth<'t> {
    /// Signed JWT for the configured app.
    App,
    /// Installation or personal access token.
    Token(&'t str),
}

/// GitHub API service, backed by the REST API.
#[derive(Clone)]
pub struct GitHubApiService {
    config: Config,
    credentials: AppCredentialsConfig,
}

impl GitHubApiService {
    /// Creates a new GitHub API service, signing app calls with `credentials`.
    pub fn new(config: Config, credentials: AppCredentialsConfig) -> Self {
        Self {
            config,
            credentials,
        }
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        auth: Auth<'_>,
    ) -> Result<RequestBuilder, GitHubError> {
        let token = match auth {
            Auth::App => create_app_token(&self.credentials, now_timestamp())?,
            Auth::Token(token) => token.to_string(),
        };

        let client = get_anonymous_client_builder(&self.config).build()?;
        Ok(client
            .request(method, build_github_url(&self.config, path))
            .bearer_auth(token))
    }

    fn paged(builder: RequestBuilder, page: GhPage) -> RequestBuilder {
        builder.query(&[("page", page.page), ("per_page", page.per_page)])
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        builder: RequestBuilder,
    ) -> Result<T, GitHubError> {
        let response = builder.send().await?;
        let response = Self::check_status(method, response).await?;
        Ok(response.json().await?)
    }

    async fn check_status(method: Method, response: Response) -> Result<Response, GitHubError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        #[derive(Deserialize)]
        struct ErrorBody {
            message: String,
        }

        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.message)
            .unwrap_or(body);

        Err(GitHubError::StatusError {
            status: status.as_u16(),
            method: method.to_string(),
            url,
            message,
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, auth: Auth<'_>) -> Result<T, GitHubError> {
        let builder = self.request(Method::GET, path, auth)?;
        self.send(Method::GET, builder).await
    }

    async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        auth: Auth<'_>,
        page: GhPage,
    ) -> Result<T, GitHubError> {
        let builder = Self::paged(self.request(Method::GET, path, auth)?, page);
        self.send(Method::GET, builder).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        auth: Auth<'_>,
        body: &B,
    ) -> Result<T, GitHubError> {
        let builder = self.request(Method::POST, path, auth)?.json(body);
        self.send(Method::POST, builder).await
    }
}

#[async_trait]
impl ApiService for GitHubApiService {
    #[tracing::instrument(skip(self))]
    async fn app_get(&self) -> Result<GhApp> {
        Ok(self.get("/app", Auth::App).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn app_installations_list(&self, page: GhPage) -> Result<Vec<GhInstallation>> {
        Ok(self
            .get_page("/app/installations", Auth::App, page)
            .await?)
    }

    #[tracing::instrument(skip(self))]
    async fn app_installation_get(&self, installation_id: u64) -> Result<GhInstallation> {
        Ok(self
            .get(&format!("/app/installations/{installation_id}"), Auth::App)
            .await?)
    }

    #[tracing::instrument(skip(self))]
    async fn app_installation_token_create(
        &self,
        installation_id: u64,
    ) -> Result<GhInstallationToken> {
        Ok(self
            .post(
                &format!("/app/installations/{installation_id}/access_tokens"),
                Auth::App,
                &serde_json::json!({}),
            )
            .await?)
    }

    #[tracing::instrument(skip(self, token))]
    async fn apps_get_by_slug(&self, token: &str, slug: &str) -> Result<GhApp> {
        Ok(self.get(&format!("/apps/{slug}"), Auth::Token(token)).await?)
    }

    #[tracing::instrument(skip(self, token))]
    async fn orgs_get(&self, token: &str, org: &str) -> Result<GhOrganization> {
        Ok(self.get(&format!("/orgs/{org}"), Auth::Token(token)).await?)
    }

    #[tracing::instrument(skip(self, token))]
    async fn orgs_installation_get(&self, token: &str, org: &str) -> Result<GhInstallation> {
        Ok(self
            .get(&format!("/orgs/{org}/installation"), Auth::Token(token))
            .await?)
    }

    #[tracing::instrument(skip(self, token))]
    async fn orgs_members_list(
        &self,
        token: &str,
        org: &str,
        page: GhPage,
    ) -> Result<Vec<GhMember>> {
        Ok(self
            .get_page(&format!("/orgs/{org}/members"), Auth::Token(token), page)
            .await?)
    }

    #[tracing::instrument(skip(self, token))]
    async fn orgs_repos_list(
        &self,
        token: &str,
        org: &str,
        page: GhPage,
    ) -> Result<Vec<GhRepository>> {
        let path = format!("/orgs/{org}/repos");
        let builder = self
            .request(Method::GET, &path, Auth::Token(token))?
            .query(&[("type", "all")]);

        Ok(self.send(Method::GET, Self::paged(builder, page)).await?)
    }

    #[tracing::instrument(skip(self, token))]
    async fn orgs_repos_create(
        &self,
        token: &str,
        org: &str,
        repository: &GhNewRepository,
    ) -> Result<GhRepository> {
        Ok(self
            .post(&format!("/orgs/{org}/repos"), Auth::Token(token), repository)
            .await?)
    }

    #[tracing::instrument(skip(self, token))]
    async fn orgs_rulesets_list(
        &self,
        token: &str,
        org: &str,
        page: GhPage,
    ) -> Result<Vec<GhRuleset>> {
        Ok(self
            .get_page(&format!("/orgs/{org}/rulesets"), Auth::Token(token), page)
            .await?)
    }

    #[tracing::instrument(skip(self, token, ruleset))]
    async fn orgs_rulesets_create(
        &self,
        token: &str,
        org: &str,
        ruleset: &serde_json::Value,
    ) -> Result<GhRuleset> {
        Ok(self
            .post(&format!("/orgs/{org}/rulesets"), Auth::Token(token), ruleset)
            .await?)
    }

    #[tracing::instrument(skip(self, token))]
    async fn installation_repos_list(
        &self,
        token: &str,
        page: GhPage,
    ) -> Result<Vec<GhRepository>> {
        #[derive(Deserialize)]
        struct Response {
            repositories: Vec<GhRepository>,
        }

        let response: Response = self
            .get_page("/installation/repositories", Auth::Token(token), page)
            .await?;
        Ok(response.repositories)
    }

    #[tracing::instrument(skip(self, token))]
    async fn enterprise_installable_orgs_list(
        &self,
        token: &str,
        enterprise: &str,
        page: GhPage,
    ) -> Result<Vec<GhOrganization>> {
        Ok(self
            .get_page(
                &format!("/enterprises/{enterprise}/apps/installable_organizations"),
                Auth::Token(token),
                page,
            )
            .await?)
    }

    #[tracing::instrument(skip(self, token))]
    async fn enterprise_org_installations_list(
        &self,
        token: &str,
        enterprise: &str,
        org: &str,
        page: GhPage,
    ) -> Result<Vec<GhInstalledApp>> {
        Ok(self
            .get_page(
                &format!("/enterprises/{enterprise}/apps/organizations/{org}/installations"),
                Auth::Token(token),
                page,
            )
            .await?)
    }

    #[tracing::instrument(skip(self, token))]
    async fn enterprise_org_installation_create(
        &self,
        token: &str,
        enterprise: &str,
        org: &str,
        client_id: &str,
        repository_selection: GhRepositorySelection,
    ) -> Result<GhInstalledApp> {
        Ok(self
            .post(
                &format!("/enterprises/{enterprise}/apps/organizations/{org}/installations"),
                Auth::Token(token),
                &serde_json::json!({
                    "client_id": client_id,
                    "repository_selection": repository_selection,
                }),
            )
            .await?)
    }
}
