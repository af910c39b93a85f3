//! Domain layer - Core business logic and entities

pub mod assertion;
pub mod error;
pub mod keys;

pub use assertion::{AssertionClaims, CLIENT_ASSERTION_TYPE, JoseHeader, Jwt, TokenRequestForm};
pub use error::DomainError;
pub use keys::{KeyMaterial, KeyProvider};
