pub(crate) mod check_app_installation;
pub(crate) mod get_organization_details;
pub(crate) mod install_app_in_organization;
pub(crate) mod list_enterprise_installed_apps;
pub(crate) mod list_installable_organizations;
pub(crate) mod list_organization_members;

pub use check_app_installation::{AppInstallationStatus, CheckAppInstallationInterface};
pub use get_organization_details::GetOrganizationDetailsInterface;
pub use install_app_in_organization::InstallAppInOrganizationInterface;
pub use list_enterprise_installed_apps::ListEnterpriseInstalledAppsInterface;
pub use list_installable_organizations::ListInstallableOrganizationsInterface;
pub use list_organization_members::ListOrganizationMembersInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    check_app_installation::MockCheckAppInstallationInterface,
    get_organization_details::MockGetOrganizationDetailsInterface,
    install_app_in_organization::MockInstallAppInOrganizationInterface,
    list_enterprise_installed_apps::MockListEnterpriseInstalledAppsInterface,
    list_installable_organizations::MockListInstallableOrganizationsInterface,
    list_organization_members::MockListOrganizationMembersInterface,
};
