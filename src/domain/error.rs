use thiserror::Error;

/// Core domain errors
///
/// Every failure is terminal for the current assembly call; nothing in this
/// crate retries. Variants carry the key id or failing stage so a
/// misconfiguration can be diagnosed from the message alone.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Key not found: no keystore entry for key id '{key_id}'")]
    KeyNotFound { key_id: String },

    #[error("Keystore access error: {message}")]
    KeyStoreAccess { message: String },

    #[error("Signing error: {message}")]
    Signing { message: String },

    #[error("Verification error: {message}")]
    Verification { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn key_not_found(key_id: impl Into<String>) -> Self {
        Self::KeyNotFound {
            key_id: key_id.into(),
        }
    }

    pub fn key_store_access(message: impl Into<String>) -> Self {
        Self::KeyStoreAccess {
            message: message.into(),
        }
    }

    pub fn signing(message: impl Into<String>) -> Self {
        Self::Signing {
            message: message.into(),
        }
    }

    pub fn verification(message: impl Into<String>) -> Self {
        Self::Verification {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
