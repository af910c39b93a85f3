//! Jwks command - prints the verification key as a JWK Set

use clap::Args;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::KeyProvider;
use crate::infrastructure::auth::{Jwk, JwkSet};
use crate::infrastructure::keystore::PemKeyStore;
use crate::infrastructure::logging;

/// Arguments for the jwks command
#[derive(Args, Clone, Default)]
pub struct JwksArgs {
    /// Keystore entry to export (overrides config)
    #[arg(long)]
    pub key_id: Option<String>,
}

/// Print the JWK Set for the configured signing key
///
/// Only public members are exported; the authorization server uses the
/// document to verify assertions signed by this tool.
pub async fn run(args: JwksArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let key_id = args.key_id.unwrap_or(config.keystore.key_id);

    let store = PemKeyStore::new(&config.keystore.path, &config.keystore.password);
    let key = store.get_key_material(&key_id).await?;

    let jwk = Jwk::from_key_material(&key);
    info!(kid = jwk.kid(), "exporting verification key");

    println!("{}", serde_json::to_string_pretty(&JwkSet::single(jwk))?);

    Ok(())
}
