pub mod installations;
pub mod organizations;
pub mod reports;
pub mod repositories;
pub mod rulesets;
