use std::fmt::{self, Debug};
use std::path::PathBuf;

use async_trait::async_trait;
use rsa::RsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use tracing::debug;

use crate::domain::{DomainError, KeyMaterial, KeyProvider};

/// Key provider backed by a directory of PKCS#8 PEM entries
///
/// Each key id maps to `<dir>/<key_id>.pem`. Entries are encrypted with the
/// store password (PBES2); with an empty password entries are read as
/// unencrypted PKCS#8, so openssl-generated keys work directly.
pub struct PemKeyStore {
    dir: PathBuf,
    password: String,
}

impl Debug for PemKeyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PemKeyStore")
            .field("dir", &self.dir)
            .field("password", &"[hidden]")
            .finish()
    }
}

impl PemKeyStore {
    pub fn new(dir: impl Into<PathBuf>, password: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            password: password.into(),
        }
    }

    fn entry_path(&self, key_id: &str) -> Result<PathBuf, DomainError> {
        // Key ids become file names; anything else is a store misuse.
        let valid = !key_id.is_empty()
            && key_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key_id.starts_with('.');
        if !valid {
            return Err(DomainError::key_store_access(format!(
                "invalid key id '{key_id}'"
            )));
        }

        Ok(self.dir.join(format!("{key_id}.pem")))
    }

    fn read_entry(&self, key_id: &str) -> Result<RsaPrivateKey, DomainError> {
        let path = self.entry_path(key_id)?;
        if !path.exists() {
            return Err(DomainError::key_not_found(key_id));
        }

        let pem = std::fs::read_to_string(&path).map_err(|e| {
            DomainError::key_store_access(format!(
                "failed to read keystore entry '{}': {e}",
                path.display()
            ))
        })?;

        if self.password.is_empty() {
            RsaPrivateKey::from_pkcs8_pem(&pem).map_err(|e| {
                DomainError::key_store_access(format!(
                    "failed to parse keystore entry '{key_id}': {e}"
                ))
            })
        } else {
            RsaPrivateKey::from_pkcs8_encrypted_pem(&pem, self.password.as_bytes()).map_err(|e| {
                DomainError::key_store_access(format!(
                    "failed to decrypt keystore entry '{key_id}': {e}"
                ))
            })
        }
    }
}

#[async_trait]
impl KeyProvider for PemKeyStore {
    async fn get_key_material(&self, key_id: &str) -> Result<KeyMaterial, DomainError> {
        let private_key = self.read_entry(key_id)?;
        debug!(key_id, store = %self.dir.display(), "loaded keystore entry");

        KeyMaterial::from_rsa_private_key(key_id, &private_key)
    }

    async fn contains(&self, key_id: &str) -> bool {
        self.entry_path(key_id)
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    fn provider_name(&self) -> &'static str {
        "pem_keystore"
    }
}
