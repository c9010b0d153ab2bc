pub(crate) mod audit_repository_access;
pub(crate) mod build_enterprise_app_inventory;
pub(crate) mod build_enterprise_report;
pub(crate) mod build_repository_inventory;

pub use audit_repository_access::{
    AccessComparison, AuditRepositoryAccessInterface, InstallationAudit, RepositoryAccessAudit,
};
pub use build_enterprise_app_inventory::{
    BuildEnterpriseAppInventoryInterface, EnterpriseAppInventory, EnterpriseApps,
    OrganizationApps,
};
pub use build_enterprise_report::{
    BuildEnterpriseReportInterface, EnterpriseReport, InstallationReport,
    OrganizationInstallState, OrganizationReport, ReportStatistics,
};
pub use build_repository_inventory::{
    BuildRepositoryInventoryInterface, InstallationRepositories, RepositoryInventory,
};

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    audit_repository_access::MockAuditRepositoryAccessInterface,
    build_enterprise_app_inventory::MockBuildEnterpriseAppInventoryInterface,
    build_enterprise_report::MockBuildEnterpriseReportInterface,
    build_repository_inventory::MockBuildRepositoryInventoryInterface,
};
