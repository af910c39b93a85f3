use std::fmt::{self, Debug};

use jsonwebtoken::{DecodingKey, EncodingKey};
use rsa::pkcs1::{EncodeRsaPrivateKey, EncodeRsaPublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::domain::DomainError;

/// Signing and verification key material for one keystore entry
///
/// Owned by the key provider; the assembler borrows it read-only for the
/// duration of one signing call. Key bytes never appear in Debug output.
#[derive(Clone)]
pub struct KeyMaterial {
    key_id: String,
    signing_key: EncodingKey,
    verifying_key: DecodingKey,
    public_key: RsaPublicKey,
}

impl Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("key_id", &self.key_id)
            .field("signing_key", &"[hidden]")
            .field("verifying_key", &"[hidden]")
            .finish()
    }
}

impl KeyMaterial {
    /// Build key material from a decrypted RSA private key
    ///
    /// The verification key is derived from the private key; it is
    /// interchangeable with one extracted from the entry's certificate.
    pub fn from_rsa_private_key(
        key_id: impl Into<String>,
        private_key: &RsaPrivateKey,
    ) -> Result<Self, DomainError> {
        let key_id = key_id.into();

        let private_pem = private_key
            .to_pkcs1_pem(rsa::pkcs1::LineEnding::LF)
            .map_err(|e| {
                DomainError::signing(format!("failed to encode RSA private key '{key_id}': {e}"))
            })?;

        let signing_key = EncodingKey::from_rsa_pem(private_pem.as_bytes()).map_err(|e| {
            DomainError::signing(format!("failed to create signing key '{key_id}': {e}"))
        })?;

        let public_key = private_key.to_public_key();
        let public_pem = public_key
            .to_pkcs1_pem(rsa::pkcs1::LineEnding::LF)
            .map_err(|e| {
                DomainError::signing(format!("failed to encode RSA public key '{key_id}': {e}"))
            })?;

        let verifying_key = DecodingKey::from_rsa_pem(public_pem.as_bytes()).map_err(|e| {
            DomainError::signing(format!("failed to create verifying key '{key_id}': {e}"))
        })?;

        Ok(Self {
            key_id,
            signing_key,
            verifying_key,
            public_key,
        })
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    pub fn signing_key(&self) -> &EncodingKey {
        &self.signing_key
    }

    pub fn verifying_key(&self) -> &DecodingKey {
        &self.verifying_key
    }

    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public_key
    }
}
