use crate::authentication::Authentication;

/// Lightweight projection of an [`Authentication`] for handler injection.
///
/// Carries just the identity and its roles; built on demand by the principal
/// resolver and alive only for one handler invocation. Either a fully-formed
/// principal is produced or resolution fails; there is no partial state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    email: String,
    authorities: Vec<String>,
}

impl Principal {
    /// Project a principal out of a resolved `Authentication`.
    #[must_use]
    pub fn from_authentication(authentication: &Authentication) -> Self {
        Self {
            email: authentication.principal().to_owned(),
            authorities: authentication.authorities().to_vec(),
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn authorities(&self) -> &[String] {
        &self.authorities
    }

    #[must_use]
    pub fn has_authority(&self, role: &str) -> bool {
        self.authorities.iter().any(|a| a == role)
    }
}
