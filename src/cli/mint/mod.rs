//! Mint command - assembles one signed client assertion and prints it

use clap::Args;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{Jwt, KeyProvider, TokenRequestForm};
use crate::infrastructure::auth::JwtAssembler;
use crate::infrastructure::keystore::PemKeyStore;
use crate::infrastructure::logging;

/// Arguments for the mint command
#[derive(Args, Clone, Default)]
pub struct MintArgs {
    /// Keystore entry to sign with (overrides config)
    #[arg(long)]
    pub key_id: Option<String>,

    /// OAuth2 client id (overrides config)
    #[arg(long)]
    pub client_id: Option<String>,

    /// Authorization server URL the assertion is addressed to (overrides config)
    #[arg(long)]
    pub audience: Option<String>,

    /// Assertion lifetime in seconds (overrides config)
    #[arg(long)]
    pub ttl: Option<u64>,

    /// Verify the minted assertion against its own key before printing
    #[arg(long)]
    pub check: bool,

    /// Also print a token request template for the assertion
    #[arg(long)]
    pub form: bool,
}

/// Mint one client assertion and print it on stdout
pub async fn run(args: MintArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let key_id = args.key_id.unwrap_or(config.keystore.key_id);
    let client_id = args.client_id.unwrap_or(config.assertion.client_id);
    let audience = args.audience.unwrap_or(config.assertion.audience);
    let ttl_seconds = args.ttl.unwrap_or(config.assertion.ttl_seconds);

    let store = PemKeyStore::new(&config.keystore.path, &config.keystore.password);
    let key = store.get_key_material(&key_id).await?;

    let assembler = JwtAssembler::new(&client_id, &audience, ttl_seconds);
    let jwt = assembler.assemble(&key)?;

    if args.check {
        let claims = assembler.verify(&jwt, &key)?;
        info!(jti = %claims.jti, exp = claims.exp, "assertion verified against its own key");
    }

    info!(%key_id, %client_id, %audience, ttl_seconds, "minted client assertion");
    println!("{jwt}");

    if args.form {
        print_token_request(&client_id, jwt);
    }

    Ok(())
}

/// Print a curl template for exchanging the assertion at the token endpoint
fn print_token_request(client_id: &str, jwt: Jwt) {
    let form = TokenRequestForm::new(client_id, jwt);
    let fields = form.fields();

    eprintln!();
    eprintln!("# Token request template:");
    eprintln!("curl -X POST <issuer>/protocol/openid-connect/token \\");
    for (index, (name, value)) in fields.iter().enumerate() {
        let terminator = if index + 1 == fields.len() { "" } else { " \\" };
        eprintln!("  --data-urlencode '{name}={value}'{terminator}");
    }
}
