//! Core module.
//!
//! Use cases, wired as `shaku` components.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod notices;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::{
    installations::{
        create_installation_token::CreateInstallationToken,
        describe_installation::DescribeInstallation,
        get_authenticated_app::GetAuthenticatedApp, list_installations::ListInstallations,
    },
    organizations::{
        check_app_installation::CheckAppInstallation,
        get_organization_details::GetOrganizationDetails,
        install_app_in_organization::InstallAppInOrganization,
        list_enterprise_installed_apps::ListEnterpriseInstalledApps,
        list_installable_organizations::ListInstallableOrganizations,
        list_organization_members::ListOrganizationMembers,
    },
    reports::{
        audit_repository_access::AuditRepositoryAccess,
        build_enterprise_app_inventory::BuildEnterpriseAppInventory,
        build_enterprise_report::BuildEnterpriseReport,
        build_repository_inventory::BuildRepositoryInventory,
    },
    repositories::{
        count_repositories_by_visibility::CountRepositoriesByVisibility,
        create_organization_repository::CreateOrganizationRepository,
        list_installation_repositories::ListInstallationRepositories,
        list_organization_repositories::ListOrganizationRepositories,
    },
    rulesets::{
        create_organization_ruleset::CreateOrganizationRuleset,
        list_organization_rulesets::ListOrganizationRulesets,
    },
};

module! {
    pub CoreModule {
        components = [
            GetAuthenticatedApp, ListInstallations, DescribeInstallation,
            CreateInstallationToken, ListInstallableOrganizations,
            GetOrganizationDetails, ListOrganizationMembers, CheckAppInstallation,
            InstallAppInOrganization, ListEnterpriseInstalledApps,
            ListOrganizationRepositories, CountRepositoriesByVisibility,
            ListInstallationRepositories, CreateOrganizationRepository,
            ListOrganizationRulesets, CreateOrganizationRuleset,
            BuildRepositoryInventory, BuildEnterpriseAppInventory,
            BuildEnterpriseReport, AuditRepositoryAccess
        ],
        providers = []
    }
}
