//! GitHub API interface.
//!
//! Types, errors and the adapter trait shared by the GitHub implementation
//! and the use cases.

mod errors;
mod installation_client;
mod interface;
pub mod pagination;
pub mod types;

pub use errors::{ApiError, Result};
pub use installation_client::InstallationClient;
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockApiService;
pub use interface::ApiService;
pub use pagination::{collect_pages, GhPage};
