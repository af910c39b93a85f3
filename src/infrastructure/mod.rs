//! Infrastructure layer - External service implementations

pub mod auth;
pub mod keystore;
pub mod logging;
