use std::fmt;

/// A compact JWS: three base64url segments joined by dots
///
/// Value type produced once by assembly. The signature segment is only
/// valid over the exact header and payload segments it was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jwt(String);

impl Jwt {
    pub(crate) fn from_segments(header: String, payload: String, signature: String) -> Self {
        Self(format!("{header}.{payload}.{signature}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Segments in order: header, payload, signature
    pub fn segments(&self) -> Option<(&str, &str, &str)> {
        let mut parts = self.0.split('.');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(header), Some(payload), Some(signature), None) => {
                Some((header, payload, signature))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Jwt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments() {
        let jwt = Jwt::from_segments("aGVhZGVy".into(), "cGF5bG9hZA".into(), "c2ln".into());

        assert_eq!(jwt.as_str(), "aGVhZGVy.cGF5bG9hZA.c2ln");
        assert_eq!(jwt.segments(), Some(("aGVhZGVy", "cGF5bG9hZA", "c2ln")));
    }

    #[test]
    fn test_display_matches_inner() {
        let jwt = Jwt::from_segments("a".into(), "b".into(), "c".into());
        assert_eq!(jwt.to_string(), "a.b.c");
    }
}
