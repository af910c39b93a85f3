use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rsa::traits::PublicKeyParts;
use serde::Serialize;

use crate::domain::KeyMaterial;

/// JSON Web Key for an RSA verification key
///
/// Export direction only: private key components are never included.
#[derive(Debug, Clone, Serialize)]
pub struct Jwk {
    /// Key type, always "RSA"
    kty: String,
    /// Key use, always "sig" for assertion verification keys
    #[serde(rename = "use")]
    key_use: String,
    /// Algorithm
    alg: String,
    /// Key ID
    kid: String,
    /// RSA modulus (base64url)
    n: String,
    /// RSA public exponent (base64url)
    e: String,
}

impl Jwk {
    /// Build the public JWK for a keystore entry's verification key
    pub fn from_key_material(material: &KeyMaterial) -> Self {
        let public_key = material.public_key();

        Self {
            kty: "RSA".to_string(),
            key_use: "sig".to_string(),
            alg: "RS256".to_string(),
            kid: material.key_id().to_string(),
            n: URL_SAFE_NO_PAD.encode(public_key.n().to_bytes_be()),
            e: URL_SAFE_NO_PAD.encode(public_key.e().to_bytes_be()),
        }
    }

    pub fn kid(&self) -> &str {
        &self.kid
    }
}

/// JWK Set document, the shape a jwks endpoint serves
#[derive(Debug, Clone, Serialize)]
pub struct JwkSet {
    keys: Vec<Jwk>,
}

impl JwkSet {
    pub fn single(jwk: Jwk) -> Self {
        Self { keys: vec![jwk] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use rsa::RsaPrivateKey;

    static TEST_KEY: Lazy<RsaPrivateKey> = Lazy::new(|| {
        RsaPrivateKey::new(&mut rand::thread_rng(), 2048).expect("failed to generate RSA key")
    });

    fn test_jwk() -> Jwk {
        let material = KeyMaterial::from_rsa_private_key("jweclient-enc-v1", &TEST_KEY).unwrap();
        Jwk::from_key_material(&material)
    }

    #[test]
    fn test_jwk_members() {
        let value = serde_json::to_value(test_jwk()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object["kty"], "RSA");
        assert_eq!(object["use"], "sig");
        assert_eq!(object["alg"], "RS256");
        assert_eq!(object["kid"], "jweclient-enc-v1");
        assert!(object["n"].as_str().is_some_and(|n| !n.is_empty()));
        assert!(object["e"].as_str().is_some_and(|e| !e.is_empty()));
    }

    #[test]
    fn test_no_private_members_exported() {
        let value = serde_json::to_value(test_jwk()).unwrap();
        let object = value.as_object().unwrap();

        for private_member in ["d", "p", "q", "dp", "dq", "qi"] {
            assert!(!object.contains_key(private_member));
        }
    }

    #[test]
    fn test_jwk_set_shape() {
        let value = serde_json::to_value(JwkSet::single(test_jwk())).unwrap();

        let keys = value["keys"].as_array().unwrap();
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0]["kid"], "jweclient-enc-v1");
    }

    #[test]
    fn test_modulus_length_matches_2048_bit_key() {
        let jwk = test_jwk();
        let value = serde_json::to_value(&jwk).unwrap();

        let n = value["n"].as_str().unwrap();
        let modulus = URL_SAFE_NO_PAD.decode(n).unwrap();
        assert_eq!(modulus.len(), 256);
    }
}
