//! GitHub API types.

mod apps;
mod common;
mod orgs;
mod repos;
mod rulesets;

pub use apps::*;
pub use common::*;
pub use orgs::*;
pub use repos::*;
pub use rulesets::*;
