use super::Jwt;

/// Assertion type identifier for JWT bearer client authentication (RFC 7523)
pub const CLIENT_ASSERTION_TYPE: &str = "urn:ietf:params:oauth:client-assertion-type:jwt-bearer";

/// Form fields of a `client_credentials` token request carrying the
/// assertion
///
/// Rendering only: the tool never sends the request itself. Callers paste
/// the fields into their HTTP client of choice.
#[derive(Debug, Clone)]
pub struct TokenRequestForm {
    client_id: String,
    assertion: Jwt,
    scope: String,
}

impl TokenRequestForm {
    pub fn new(client_id: impl Into<String>, assertion: Jwt) -> Self {
        Self {
            client_id: client_id.into(),
            assertion,
            scope: "profile openid".to_string(),
        }
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Field pairs in the order the token endpoint expects them
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("client_id", self.client_id.as_str()),
            ("grant_type", "client_credentials"),
            ("client_assertion_type", CLIENT_ASSERTION_TYPE),
            ("client_assertion", self.assertion.as_str()),
            ("scope", self.scope.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_jwt() -> Jwt {
        Jwt::from_segments("aGVhZGVy".into(), "cGF5bG9hZA".into(), "c2ln".into())
    }

    #[test]
    fn test_field_set_matches_grant_contract() {
        let form = TokenRequestForm::new("jweclient", sample_jwt());
        let fields = form.fields();

        let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "client_id",
                "grant_type",
                "client_assertion_type",
                "client_assertion",
                "scope",
            ]
        );
    }

    #[test]
    fn test_assertion_and_defaults() {
        let form = TokenRequestForm::new("jweclient", sample_jwt());
        let fields = form.fields();

        assert!(fields.contains(&("grant_type", "client_credentials")));
        assert!(fields.contains(&("client_assertion_type", CLIENT_ASSERTION_TYPE)));
        assert!(fields.contains(&("client_assertion", "aGVhZGVy.cGF5bG9hZA.c2ln")));
        assert!(fields.contains(&("scope", "profile openid")));
    }

    #[test]
    fn test_custom_scope() {
        let form = TokenRequestForm::new("jweclient", sample_jwt()).with_scope("openid");
        assert!(form.fields().contains(&("scope", "openid")));
    }
}
