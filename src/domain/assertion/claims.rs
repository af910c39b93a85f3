use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims of a client assertion
///
/// Created fresh per signing call and never mutated afterwards. Exactly
/// these five keys appear in the payload, in field declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionClaims {
    /// Expiration, seconds since epoch
    pub exp: i64,
    /// Unique token id, fresh UUID v4 per assertion
    pub jti: Uuid,
    /// Issuer, the OAuth2 client id
    pub iss: String,
    /// Audience, the authorization server (realm) URL
    pub aud: String,
    /// Subject, equals the client id for client assertions
    pub sub: String,
}

impl AssertionClaims {
    /// Create claims for a client assertion expiring `ttl_seconds` from now
    pub fn new(client_id: &str, audience: &str, ttl_seconds: u64) -> Self {
        let exp = Utc::now() + Duration::seconds(ttl_seconds as i64);

        Self {
            exp: exp.timestamp(),
            jti: Uuid::new_v4(),
            iss: client_id.to_string(),
            aud: audience.to_string(),
            sub: client_id.to_string(),
        }
    }

    /// Check if the assertion has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUDIENCE: &str = "http://localhost:8081/realms/jwedemo";

    #[test]
    fn test_issuer_equals_subject() {
        let claims = AssertionClaims::new("jweclient", AUDIENCE, 3600);

        assert_eq!(claims.iss, "jweclient");
        assert_eq!(claims.sub, "jweclient");
        assert_eq!(claims.aud, AUDIENCE);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_expiration_offset() {
        let before = Utc::now().timestamp();
        let claims = AssertionClaims::new("jweclient", AUDIENCE, 3600);
        let after = Utc::now().timestamp();

        assert!(claims.exp >= before + 3600);
        assert!(claims.exp <= after + 3600);
    }

    #[test]
    fn test_jti_is_unique_per_call() {
        let first = AssertionClaims::new("jweclient", AUDIENCE, 3600);
        let second = AssertionClaims::new("jweclient", AUDIENCE, 3600);

        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn test_serialized_key_order() {
        let claims = AssertionClaims::new("jweclient", AUDIENCE, 3600);
        let json = serde_json::to_string(&claims).unwrap();

        let positions: Vec<usize> = ["\"exp\"", "\"jti\"", "\"iss\"", "\"aud\"", "\"sub\""]
            .iter()
            .map(|key| json.find(key).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_payload_contains_exactly_five_keys() {
        let claims = AssertionClaims::new("jweclient", AUDIENCE, 3600);
        let value: serde_json::Value = serde_json::to_value(&claims).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 5);
        for key in ["exp", "jti", "iss", "aud", "sub"] {
            assert!(object.contains_key(key), "missing claim '{key}'");
        }
    }

    #[test]
    fn test_expired_claims() {
        let mut claims = AssertionClaims::new("jweclient", AUDIENCE, 3600);
        claims.exp = Utc::now().timestamp() - 60;
        assert!(claims.is_expired());
    }
}
