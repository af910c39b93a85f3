//! Keystore-backed key providers

mod pem_store;

pub use pem_store::PemKeyStore;
