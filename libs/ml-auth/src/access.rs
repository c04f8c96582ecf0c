//! The access decision function.

use ml_security::Authentication;

use crate::error::AuthError;

/// Decide whether an identity may execute an operation requiring `required`
/// roles.
///
/// Rules, in order:
/// 1. no `Authentication` → [`AuthError::Unauthenticated`];
/// 2. `required` empty → allow (no restriction was declared);
/// 3. `required` and the identity's authorities intersect → allow;
/// 4. otherwise → [`AuthError::Forbidden`].
///
/// Pure decision over its two inputs; callers are responsible for running it
/// BEFORE the guarded operation.
pub fn enforce(required: &[String], authentication: Option<&Authentication>) -> Result<(), AuthError> {
    let Some(authentication) = authentication else {
        return Err(AuthError::Unauthenticated);
    };

    if required.is_empty() {
        return Ok(());
    }

    if required.iter().any(|role| authentication.has_authority(role)) {
        Ok(())
    } else {
        Err(AuthError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth_with(roles: &[&str]) -> Authentication {
        Authentication::builder()
            .principal("admin@x.com")
            .authorities(roles.iter().map(ToString::to_string).collect())
            .build()
    }

    fn required(roles: &[&str]) -> Vec<String> {
        roles.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn absent_authentication_is_unauthenticated_even_without_roles() {
        assert!(matches!(
            enforce(&required(&[]), None),
            Err(AuthError::Unauthenticated)
        ));
        assert!(matches!(
            enforce(&required(&["ROLE_ADMIN"]), None),
            Err(AuthError::Unauthenticated)
        ));
    }

    #[test]
    fn empty_requirement_allows_any_authenticated_identity() {
        assert!(enforce(&required(&[]), Some(&auth_with(&[]))).is_ok());
        assert!(enforce(&required(&[]), Some(&auth_with(&["ROLE_MEMBER"]))).is_ok());
    }

    #[test]
    fn intersection_allows() {
        let auth = auth_with(&["ROLE_ADMIN"]);
        assert!(enforce(&required(&["ROLE_ADMIN"]), Some(&auth)).is_ok());
        assert!(enforce(&required(&["ROLE_USER", "ROLE_ADMIN"]), Some(&auth)).is_ok());
    }

    #[test]
    fn disjoint_roles_are_forbidden() {
        let auth = auth_with(&["ROLE_ADMIN"]);
        assert!(matches!(
            enforce(&required(&["ROLE_USER"]), Some(&auth)),
            Err(AuthError::Forbidden)
        ));
    }

    #[test]
    fn empty_authority_set_is_forbidden_when_roles_are_required() {
        assert!(matches!(
            enforce(&required(&["ROLE_ADMIN"]), Some(&auth_with(&[]))),
            Err(AuthError::Forbidden)
        ));
    }

    #[test]
    fn decision_matrix_matches_intersection_semantics() {
        let role_sets: &[&[&str]] = &[&[], &["ROLE_MEMBER"], &["ROLE_ADMIN"], &["ROLE_MEMBER", "ROLE_ADMIN"]];

        for granted in role_sets {
            let auth = auth_with(granted);
            for wanted in role_sets {
                let decision = enforce(&required(wanted), Some(&auth));
                let intersects = wanted.iter().any(|r| granted.contains(r));
                if wanted.is_empty() || intersects {
                    assert!(decision.is_ok(), "granted={granted:?} wanted={wanted:?}");
                } else {
                    assert!(
                        matches!(decision, Err(AuthError::Forbidden)),
                        "granted={granted:?} wanted={wanted:?}"
                    );
                }
            }
        }
    }
}
