use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use ml_auth::UserDetails;

/// A registered member.
///
/// The password is kept only as a digest; `check_password` hashes the
/// candidate and compares, so the stored secret never leaves the record.
/// Which digest is in use is deliberately not load-bearing anywhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: Uuid,
    pub email: String,
    password_digest: String,
    pub age: i32,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Member {
    #[must_use]
    pub fn new(email: String, password: &str, age: i32, roles: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_digest: digest(password),
            age,
            roles,
            created_at: Utc::now(),
        }
    }

    /// Whether `candidate` matches the stored password.
    #[must_use]
    pub fn check_password(&self, candidate: &str) -> bool {
        self.password_digest == digest(candidate)
    }

    /// Replace the stored password.
    pub fn set_password(&mut self, password: &str) {
        self.password_digest = digest(password);
    }
}

fn digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

impl UserDetails for Member {
    fn email(&self) -> &str {
        &self.email
    }

    fn authorities(&self) -> &[String] {
        &self.roles
    }

    fn check_password(&self, candidate: &str) -> bool {
        Member::check_password(self, candidate)
    }
}
