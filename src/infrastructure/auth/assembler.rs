use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use jsonwebtoken::{Algorithm, Validation, crypto, decode};
use serde::Serialize;
use tracing::debug;

use crate::domain::{AssertionClaims, DomainError, JoseHeader, Jwt, KeyMaterial};

/// Assembles and signs client assertion JWTs
///
/// Stateless aside from the client id, audience, and ttl it is configured
/// with; every [`assemble`](Self::assemble) call reads the clock and the OS
/// random source and produces an independent token. Assembly is
/// all-or-nothing: no partial token is ever returned.
#[derive(Debug, Clone)]
pub struct JwtAssembler {
    client_id: String,
    audience: String,
    ttl_seconds: u64,
}

impl JwtAssembler {
    /// Create an assembler for the given client and audience
    pub fn new(
        client_id: impl Into<String>,
        audience: impl Into<String>,
        ttl_seconds: u64,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            audience: audience.into(),
            ttl_seconds,
        }
    }

    /// Serialize a header or claims value and base64url-encode it without
    /// padding
    pub fn encode_segment<T: Serialize>(value: &T) -> Result<String, DomainError> {
        let json = serde_json::to_vec(value)
            .map_err(|e| DomainError::signing(format!("failed to serialize segment: {e}")))?;

        Ok(URL_SAFE_NO_PAD.encode(json))
    }

    /// RS256-sign the concatenation `header_segment.payload_segment`
    ///
    /// Returns the base64url-encoded signature. The primitive accepts any
    /// RSA key it can use; no minimum modulus size is enforced here.
    pub fn sign(
        header_segment: &str,
        payload_segment: &str,
        key: &KeyMaterial,
    ) -> Result<String, DomainError> {
        let signing_input = format!("{header_segment}.{payload_segment}");

        crypto::sign(signing_input.as_bytes(), key.signing_key(), Algorithm::RS256).map_err(|e| {
            DomainError::signing(format!(
                "RS256 signing failed for key '{}': {e}",
                key.key_id()
            ))
        })
    }

    /// Build, encode, and sign a client assertion under the given key
    pub fn assemble(&self, key: &KeyMaterial) -> Result<Jwt, DomainError> {
        let header = JoseHeader::rs256(key.key_id());
        let claims = AssertionClaims::new(&self.client_id, &self.audience, self.ttl_seconds);

        let header_segment = Self::encode_segment(&header)?;
        let payload_segment = Self::encode_segment(&claims)?;
        let signature = Self::sign(&header_segment, &payload_segment, key)?;

        debug!(
            key_id = key.key_id(),
            jti = %claims.jti,
            exp = claims.exp,
            "assembled client assertion"
        );

        Ok(Jwt::from_segments(header_segment, payload_segment, signature))
    }

    /// Verify a produced assertion against the entry's verification key and
    /// recover its claims
    pub fn verify(&self, token: &Jwt, key: &KeyMaterial) -> Result<AssertionClaims, DomainError> {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[self.audience.as_str()]);
        validation.set_issuer(&[self.client_id.as_str()]);

        let token_data = decode::<AssertionClaims>(token.as_str(), key.verifying_key(), &validation)
            .map_err(|e| {
                DomainError::verification(format!(
                    "assertion failed verification under key '{}': {e}",
                    key.key_id()
                ))
            })?;

        Ok(token_data.claims)
    }
}
