//! Client assertion minting tool
//!
//! Builds and signs RS256 client assertion JWTs for OAuth2/OIDC
//! `private_key_jwt` token requests:
//! - Keys come from an encrypted PEM keystore behind a `KeyProvider` seam
//! - Assembly is deterministic: serialize, base64url-encode, sign, join
//! - The verification key can be exported as a JWK Set

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{AssertionClaims, JoseHeader, Jwt, KeyMaterial, KeyProvider};
pub use infrastructure::auth::JwtAssembler;
pub use infrastructure::keystore::PemKeyStore;
