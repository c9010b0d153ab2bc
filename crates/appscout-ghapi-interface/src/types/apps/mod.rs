mod app;
mod installation;
mod installation_token;
mod installed_app;
mod repository_selection;

pub use app::GhApp;
pub use installation::GhInstallation;
pub use installation_token::GhInstallationToken;
pub use installed_app::GhInstalledApp;
pub use repository_selection::GhRepositorySelection;
