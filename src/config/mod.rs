//! Application configuration

mod app_config;

pub use app_config::{AppConfig, AssertionConfig, KeystoreConfig, LogFormat, LoggingConfig};
