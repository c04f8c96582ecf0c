use secrecy::SecretString;

/// The resolved identity of one in-flight request.
///
/// Built once by the verification step after the caller's credentials check
/// out, then installed into the [`SecurityContext`](crate::SecurityContext)
/// for the rest of the request. Immutable after construction: there are no
/// setters, and the context hands out shared references only.
///
/// The credential payload is optional (verification usually discards it) and
/// wrapped in [`SecretString`] so `Debug` redacts the value automatically.
#[derive(Debug, Clone)]
pub struct Authentication {
    /// Identity reference, the subject's email address.
    principal: String,
    /// Credential the request was verified with, if retained at all.
    credentials: Option<SecretString>,
    /// Granted role names, e.g. `"ROLE_ADMIN"`. Order is preserved.
    authorities: Vec<String>,
}

impl Authentication {
    /// Create a new `Authentication` builder.
    #[must_use]
    pub fn builder() -> AuthenticationBuilder {
        AuthenticationBuilder::default()
    }

    /// The verified identity (email) this request acts as.
    #[must_use]
    pub fn principal(&self) -> &str {
        &self.principal
    }

    /// The retained credential, if any. Never serialized or logged.
    #[must_use]
    pub fn credentials(&self) -> Option<&SecretString> {
        self.credentials.as_ref()
    }

    /// The granted role names, in grant order.
    #[must_use]
    pub fn authorities(&self) -> &[String] {
        &self.authorities
    }

    /// Whether the identity carries the given role name.
    #[must_use]
    pub fn has_authority(&self, role: &str) -> bool {
        self.authorities.iter().any(|a| a == role)
    }
}

#[derive(Default)]
pub struct AuthenticationBuilder {
    principal: Option<String>,
    credentials: Option<SecretString>,
    authorities: Vec<String>,
}

impl AuthenticationBuilder {
    #[must_use]
    pub fn principal(mut self, principal: impl Into<String>) -> Self {
        self.principal = Some(principal.into());
        self
    }

    #[must_use]
    pub fn credentials(mut self, credentials: impl Into<SecretString>) -> Self {
        self.credentials = Some(credentials.into());
        self
    }

    #[must_use]
    pub fn authorities(mut self, authorities: Vec<String>) -> Self {
        self.authorities = authorities;
        self
    }

    #[must_use]
    pub fn build(self) -> Authentication {
        Authentication {
            principal: self.principal.unwrap_or_default(),
            credentials: self.credentials,
            authorities: self.authorities,
        }
    }
}
