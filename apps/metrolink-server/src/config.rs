//! Server configuration.
//!
//! Layered the usual way: built-in defaults, then an optional YAML file,
//! then `METROLINK_`-prefixed environment variables (`__` separates
//! sections, e.g. `METROLINK_SERVER__PORT=9090`).

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields, default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoggingConfig {
    /// `tracing-subscriber` env-filter directive, e.g. `info,ml_auth=debug`.
    /// `RUST_LOG` takes precedence when set.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields, default)]
pub struct AuthConfig {
    /// If true, routes without an explicit access declaration still require
    /// authentication (no role restriction). Default: false (public).
    pub require_auth_by_default: bool,

    /// Accounts created at startup, before the first request. The only way
    /// to mint `ROLE_ADMIN`; self-registration never grants it.
    pub seed_members: Vec<SeedMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedMember {
    pub email: String,
    pub password: String,
    #[serde(default = "default_seed_age")]
    pub age: i32,
    pub roles: Vec<String>,
}

fn default_seed_age() -> i32 {
    0
}

/// Load configuration from defaults, an optional YAML file, and the
/// environment.
pub fn load(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
    if let Some(path) = path {
        figment = figment.merge(Yaml::file(path));
    }
    let config = figment
        .merge(Env::prefixed("METROLINK_").split("__"))
        .extract()?;
    Ok(config)
}
