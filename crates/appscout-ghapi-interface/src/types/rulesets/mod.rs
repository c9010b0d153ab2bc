mod ruleset;

pub use ruleset::GhRuleset;
