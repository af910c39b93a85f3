//! Assertion signing infrastructure
//!
//! This module provides JWS assembly and signing plus JWK export for the
//! verification key.

mod assembler;
mod jwks;

pub use assembler::JwtAssembler;
pub use jwks::{Jwk, JwkSet};
