pub(crate) mod create_installation_token;
pub(crate) mod describe_installation;
pub(crate) mod get_authenticated_app;
pub(crate) mod list_installations;

pub use create_installation_token::CreateInstallationTokenInterface;
pub use describe_installation::DescribeInstallationInterface;
pub use get_authenticated_app::GetAuthenticatedAppInterface;
pub use list_installations::ListInstallationsInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    create_installation_token::MockCreateInstallationTokenInterface,
    describe_installation::MockDescribeInstallationInterface,
    get_authenticated_app::MockGetAuthenticatedAppInterface,
    list_installations::MockListInstallationsInterface,
};
