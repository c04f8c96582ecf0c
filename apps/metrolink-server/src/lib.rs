//! Metrolink server assembly, exposed as a library so acceptance tests can
//! drive the exact router the binary serves.

pub mod app;
pub mod config;
