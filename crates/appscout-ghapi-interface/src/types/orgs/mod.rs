mod member;
mod organization;

pub use member::GhMember;
pub use organization::GhOrganization;
