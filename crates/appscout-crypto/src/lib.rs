//! Crypto module.

mod errors;
mod jwt;
mod rsa;

pub use jwt::JwtUtils;

pub use self::{
    errors::{CryptoError, Result},
    rsa::{PrivateRsaKey, PublicRsaKey, RsaUtils},
};
