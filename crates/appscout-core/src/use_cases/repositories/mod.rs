pub(crate) mod count_repositories_by_visibility;
pub(crate) mod create_organization_repository;
pub(crate) mod list_installation_repositories;
pub(crate) mod list_organization_repositories;

pub use count_repositories_by_visibility::{
    CountRepositoriesByVisibilityInterface, RepositoryCounts,
};
pub use create_organization_repository::CreateOrganizationRepositoryInterface;
pub use list_installation_repositories::ListInstallationRepositoriesInterface;
pub use list_organization_repositories::ListOrganizationRepositoriesInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    count_repositories_by_visibility::MockCountRepositoriesByVisibilityInterface,
    create_organization_repository::MockCreateOrganizationRepositoryInterface,
    list_installation_repositories::MockListInstallationRepositoriesInterface,
    list_organization_repositories::MockListOrganizationRepositoriesInterface,
};
