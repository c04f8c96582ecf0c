//! Declarative per-route access requirements.
//!
//! Modules declare each operation's access level at registration time; the
//! declarations compile into per-method `matchit` routers that the gate
//! consults on every request. The table is the single source of truth: no
//! handler re-checks its own requirement.

use std::collections::HashMap;

use http::Method;
use thiserror::Error;

/// Access level declared for one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAccess {
    /// No authentication; the gate is bypassed entirely.
    Public,
    /// A valid identity is required; `required_roles` empty means any
    /// authenticated caller, otherwise the caller's authorities must
    /// intersect the set.
    Authenticated { required_roles: Vec<String> },
}

impl RouteAccess {
    /// Any authenticated caller.
    #[must_use]
    pub fn authenticated() -> Self {
        Self::Authenticated {
            required_roles: Vec::new(),
        }
    }

    /// Authenticated caller holding at least one of `roles`.
    pub fn secured<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Authenticated {
            required_roles: roles.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("invalid route pattern '{path}': {source}")]
    InvalidPattern {
        path: String,
        source: matchit::InsertError,
    },
}

/// Collects route declarations during router assembly.
pub struct RoutePolicyBuilder {
    matchers: HashMap<Method, matchit::Router<RouteAccess>>,
    require_auth_by_default: bool,
}

impl RoutePolicyBuilder {
    /// `require_auth_by_default` decides the fate of requests that match no
    /// declaration: `false` treats them as public, `true` demands a valid
    /// identity (with no role restriction).
    #[must_use]
    pub fn new(require_auth_by_default: bool) -> Self {
        Self {
            matchers: HashMap::new(),
            require_auth_by_default,
        }
    }

    /// Declare one route's access level. `path` uses axum 0.8 syntax
    /// (`/members/{id}`), which `matchit` shares.
    pub fn declare(
        &mut self,
        method: Method,
        path: &str,
        access: RouteAccess,
    ) -> Result<&mut Self, PolicyError> {
        self.matchers
            .entry(method)
            .or_insert_with(matchit::Router::new)
            .insert(path, access)
            .map_err(|source| PolicyError::InvalidPattern {
                path: path.to_owned(),
                source,
            })?;
        Ok(self)
    }

    pub fn public(&mut self, method: Method, path: &str) -> Result<&mut Self, PolicyError> {
        self.declare(method, path, RouteAccess::Public)
    }

    pub fn authenticated(&mut self, method: Method, path: &str) -> Result<&mut Self, PolicyError> {
        self.declare(method, path, RouteAccess::authenticated())
    }

    pub fn secured<I, S>(
        &mut self,
        method: Method,
        path: &str,
        roles: I,
    ) -> Result<&mut Self, PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declare(method, path, RouteAccess::secured(roles))
    }

    #[must_use]
    pub fn build(self) -> RoutePolicy {
        RoutePolicy {
            matchers: self.matchers,
            require_auth_by_default: self.require_auth_by_default,
        }
    }
}

/// Compiled registration table consulted by the gate per request.
#[derive(Clone)]
pub struct RoutePolicy {
    matchers: HashMap<Method, matchit::Router<RouteAccess>>,
    require_auth_by_default: bool,
}

impl RoutePolicy {
    /// Resolve the access level for `(method, path)`.
    #[must_use]
    pub fn resolve(&self, method: &Method, path: &str) -> RouteAccess {
        if let Some(matcher) = self.matchers.get(method)
            && let Ok(matched) = matcher.at(path)
        {
            return matched.value.clone();
        }

        if self.require_auth_by_default {
            RouteAccess::authenticated()
        } else {
            RouteAccess::Public
        }
    }
}
