use appscout_ghapi_interface::{types::GhRepositoryVisibility, GhPage};
use async_trait::async_trait;
use shaku::{Component, Interface};

use crate::{
    notices::{Notice, Noted},
    CoreContext,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepositoryCounts {
    pub public: u64,
    pub internal: u64,
    pub private: u64,
    pub total: u64,
}

impl RepositoryCounts {
    pub fn add(&mut self, visibility: GhRepositoryVisibility) {
        match visibility {
            GhRepositoryVisibility::Public => self.public += 1,
            GhRepositoryVisibility::Internal => self.internal += 1,
            GhRepositoryVisibility::Private => self.private += 1,
        }
        self.total += 1;
    }
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CountRepositoriesByVisibilityInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        token: &str,
        org: &str,
    ) -> Noted<RepositoryCounts>;
}

#[derive(Component)]
#[shaku(interface = CountRepositoriesByVisibilityInterface)]
pub(crate) struct CountRepositoriesByVisibility;

#[async_trait]
impl CountRepositoriesByVisibilityInterface for CountRepositoriesByVisibility {
    #[tracing::instrument(skip(self, ctx, token), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        token: &str,
        org: &str,
    ) -> Noted<RepositoryCounts> {
        // Counted page by page, so a failure keeps what was already seen.
        let mut counts = RepositoryCounts::default();
        let mut page = GhPage::first(ctx.config.api.github.page_size);

        loop {
            match ctx.api_service.orgs_repos_list(token, org, page).await {
                Ok(repos) => {
                    for repo in &repos {
                        counts.add(repo.effective_visibility());
                    }

                    if page.is_last(repos.len()) {
                        return Noted::clean(counts);
                    }

                    page = page.next();
                }
                Err(e) => {
                    return Noted::with_notice(
                        counts,
                        Notice::error(format!("Could not count repositories for {org}: {e}")),
                    )
                }
            }
        }
    }
}
