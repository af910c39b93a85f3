use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub keystore: KeystoreConfig,
    pub assertion: AssertionConfig,
    pub logging: LoggingConfig,
}

/// Where the signing keys live and how to open them
///
/// Explicit configuration, never process-wide globals: the values here are
/// handed to the key provider at construction time.
#[derive(Clone, Deserialize)]
pub struct KeystoreConfig {
    /// Directory holding one PEM entry per key id
    pub path: String,
    /// Password the entries are encrypted with; empty for unencrypted keys
    pub password: String,
    /// Keystore entry that signs assertions
    pub key_id: String,
}

impl std::fmt::Debug for KeystoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeystoreConfig")
            .field("path", &self.path)
            .field("password", &"[hidden]")
            .field("key_id", &self.key_id)
            .finish()
    }
}

/// What goes into the assertion claims
#[derive(Debug, Clone, Deserialize)]
pub struct AssertionConfig {
    /// OAuth2 client id, used for both `iss` and `sub`
    pub client_id: String,
    /// Authorization server (realm) URL, used for `aud`
    pub audience: String,
    /// Assertion lifetime in seconds
    pub ttl_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            keystore: KeystoreConfig::default(),
            assertion: AssertionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for KeystoreConfig {
    fn default() -> Self {
        Self {
            path: "keystore".to_string(),
            password: String::new(),
            key_id: "jweclient-enc-v1".to_string(),
        }
    }
}

impl Default for AssertionConfig {
    fn default() -> Self {
        Self {
            client_id: "jweclient".to_string(),
            audience: "http://localhost:8081/realms/jwedemo".to_string(),
            ttl_seconds: 3600,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
