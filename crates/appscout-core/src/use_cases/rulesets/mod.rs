pub(crate) mod create_organization_ruleset;
pub(crate) mod list_organization_rulesets;

pub use create_organization_ruleset::CreateOrganizationRulesetInterface;
pub use list_organization_rulesets::ListOrganizationRulesetsInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    create_organization_ruleset::MockCreateOrganizationRulesetInterface,
    list_organization_rulesets::MockListOrganizationRulesetsInterface,
};
