//! Shared HTTP primitives for Metrolink modules.
//!
//! The only resident so far is the RFC-9457 [`Problem`] response type that
//! every REST error mapping in the workspace converges on.

pub mod problem;

pub use problem::Problem;
