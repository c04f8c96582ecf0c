//! Well-known role names.

/// Full administrative access, including member administration.
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// Granted to every self-registered member.
pub const ROLE_MEMBER: &str = "ROLE_MEMBER";
