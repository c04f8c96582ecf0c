//! Per-request security context.
//!
//! The context is task-local storage: each request is served by one tokio
//! task, and the authentication middleware runs the remainder of the request
//! future inside [`SecurityContext::scope`]. Concurrent requests therefore
//! cannot observe each other's identity, and the slot empties when the scope
//! unwinds, on completion and on cancellation alike, so a pooled worker can
//! never carry a stale identity into the next request it picks up.

use std::future::Future;
use std::sync::Arc;

use crate::authentication::Authentication;

tokio::task_local! {
    static CURRENT_AUTHENTICATION: Option<Arc<Authentication>>;
}

/// Handle to the current execution unit's security slot.
///
/// The slot holds at most one [`Authentication`]: empty at request start,
/// populated exactly once by entering a [`scope`](Self::scope), read any
/// number of times via [`current`](Self::current), and emptied when the
/// scope future finishes. There is no unscoped mutable global and no way to
/// overwrite a populated slot from inside its scope.
pub struct SecurityContext;

impl SecurityContext {
    /// Run `fut` with `authentication` installed as the current identity.
    ///
    /// Everything awaited inside `fut` (extractors, handlers, domain
    /// services) observes the same `Authentication` through
    /// [`current`](Self::current).
    pub async fn scope<F>(authentication: Authentication, fut: F) -> F::Output
    where
        F: Future,
    {
        CURRENT_AUTHENTICATION
            .scope(Some(Arc::new(authentication)), fut)
            .await
    }

    /// Run `fut` with an explicitly empty slot.
    ///
    /// Used for public routes so that code deeper down sees "no identity"
    /// rather than inheriting whatever an enclosing scope may hold.
    pub async fn unauthenticated_scope<F>(fut: F) -> F::Output
    where
        F: Future,
    {
        CURRENT_AUTHENTICATION.scope(None, fut).await
    }

    /// The current request's `Authentication`, or `None` when the slot is
    /// empty or no scope is active on this task.
    #[must_use]
    pub fn current() -> Option<Arc<Authentication>> {
        CURRENT_AUTHENTICATION
            .try_with(Clone::clone)
            .unwrap_or_default()
    }

    /// Whether the current execution unit carries a resolved identity.
    #[must_use]
    pub fn is_authenticated() -> bool {
        Self::current().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth_for(email: &str, roles: &[&str]) -> Authentication {
        Authentication::builder()
            .principal(email)
            .authorities(roles.iter().map(ToString::to_string).collect())
            .build()
    }

    #[tokio::test]
    async fn current_is_none_outside_any_scope() {
        assert!(SecurityContext::current().is_none());
        assert!(!SecurityContext::is_authenticated());
    }

    #[tokio::test]
    async fn scope_exposes_the_installed_authentication() {
        let observed = SecurityContext::scope(auth_for("a@x.com", &["ROLE_MEMBER"]), async {
            SecurityContext::current()
        })
        .await;

        let auth = observed.unwrap();
        assert_eq!(auth.principal(), "a@x.com");
        assert_eq!(auth.authorities(), &["ROLE_MEMBER"]);
    }

    #[tokio::test]
    async fn slot_is_empty_again_after_scope_exit() {
        SecurityContext::scope(auth_for("a@x.com", &[]), async {
            assert!(SecurityContext::is_authenticated());
        })
        .await;

        // Same task, next "request": nothing may leak over.
        assert!(SecurityContext::current().is_none());
    }

    #[tokio::test]
    async fn unauthenticated_scope_masks_an_outer_identity() {
        SecurityContext::scope(auth_for("a@x.com", &[]), async {
            SecurityContext::unauthenticated_scope(async {
                assert!(SecurityContext::current().is_none());
            })
            .await;
            assert!(SecurityContext::is_authenticated());
        })
        .await;
    }

    #[tokio::test]
    async fn concurrent_tasks_never_observe_each_other() {
        let barrier = Arc::new(tokio::sync::Barrier::new(2));

        let spawn_reader = |email: &'static str, barrier: Arc<tokio::sync::Barrier>| {
            tokio::spawn(SecurityContext::scope(auth_for(email, &[]), async move {
                // Rendezvous so both scopes are provably alive at once.
                barrier.wait().await;
                for _ in 0..16 {
                    let current = SecurityContext::current().unwrap();
                    assert_eq!(current.principal(), email);
                    tokio::task::yield_now().await;
                }
                barrier.wait().await;
            }))
        };

        let a = spawn_reader("a@x.com", barrier.clone());
        let b = spawn_reader("b@x.com", barrier);
        a.await.unwrap();
        b.await.unwrap();
    }

    #[tokio::test]
    async fn cancelled_scope_leaves_no_residue() {
        let (started_tx, started_rx) = tokio::sync::oneshot::channel::<()>();

        let handle = tokio::spawn(SecurityContext::scope(auth_for("a@x.com", &[]), async {
            let _ = started_tx.send(());
            // Park forever; the test aborts us mid-scope.
            std::future::pending::<()>().await;
        }));

        started_rx.await.unwrap();
        handle.abort();
        let _ = handle.await;

        assert!(SecurityContext::current().is_none());
    }
}
