use async_trait::async_trait;
use std::fmt::Debug;

use super::KeyMaterial;
use crate::domain::DomainError;

/// Trait for key providers backing the assembler (PEM keystore, HSM, etc.)
#[async_trait]
pub trait KeyProvider: Send + Sync + Debug {
    /// Get signing/verification material for a key id
    ///
    /// Fails with [`DomainError::KeyNotFound`] when the id is absent from
    /// the backing store and [`DomainError::KeyStoreAccess`] when the store
    /// cannot be opened or decrypted. Both indicate misconfiguration;
    /// callers must not retry.
    async fn get_key_material(&self, key_id: &str) -> Result<KeyMaterial, DomainError>;

    /// Check whether this provider has an entry for the given key id
    async fn contains(&self, key_id: &str) -> bool;

    /// Provider name for logging/debugging
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

    #[derive(Debug)]
    pub struct MockKeyProvider {
        keys: RwLock<HashMap<String, KeyMaterial>>,
        name: &'static str,
    }

    impl MockKeyProvider {
        pub fn new(name: &'static str) -> Self {
            Self {
                keys: RwLock::new(HashMap::new()),
                name,
            }
        }

        pub fn with_key(self, material: KeyMaterial) -> Self {
            self.keys
                .write()
                .unwrap()
                .insert(material.key_id().to_string(), material);
            self
        }
    }

    #[async_trait]
    impl KeyProvider for MockKeyProvider {
        async fn get_key_material(&self, key_id: &str) -> Result<KeyMaterial, DomainError> {
            self.keys
                .read()
                .unwrap()
                .get(key_id)
                .cloned()
                .ok_or_else(|| DomainError::key_not_found(key_id))
        }

        async fn contains(&self, key_id: &str) -> bool {
            self.keys.read().unwrap().contains_key(key_id)
        }

        fn provider_name(&self) -> &'static str {
            self.name
        }
    }
}
