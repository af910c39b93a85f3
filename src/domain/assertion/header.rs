use serde::{Deserialize, Serialize};

/// JOSE header of a client assertion
///
/// Immutable once constructed; serialized exactly once per assembly, in
/// field declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoseHeader {
    /// Signature algorithm, always "RS256"
    pub alg: String,
    /// Token type, always "JWT"
    pub typ: String,
    /// Id of the keystore entry that signs the assertion
    pub kid: String,
}

impl JoseHeader {
    /// Header for an RS256-signed JWT under the given key id
    pub fn rs256(key_id: impl Into<String>) -> Self {
        Self {
            alg: "RS256".to_string(),
            typ: "JWT".to_string(),
            kid: key_id.into(),
        }
    }
}
