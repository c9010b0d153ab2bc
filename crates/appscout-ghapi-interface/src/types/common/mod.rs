mod account;
mod account_type;

pub use account::GhAccount;
pub use account_type::GhAccountType;
