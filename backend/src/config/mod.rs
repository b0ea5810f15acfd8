//! Central module for application-wide configuration settings.
//!
//! Settings are layered: built-in defaults, then an optional `config.toml`
//! next to the binary, then `PLAYGROUND__*` environment variables
//! (e.g. `PLAYGROUND__SERVER__PORT=9000`).

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Server {
    pub fn addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8000,
        }
    }
}

/// Record defaults applied by the user store.
#[derive(Debug, Clone, Deserialize)]
pub struct Users {
    /// Stored when a user is created without an email.
    pub default_email: String,
    /// Insert the demo user on startup.
    pub seed_demo: bool,
}

impl Default for Users {
    fn default() -> Self {
        Self {
            default_email: "jeff@dudeism.com".into(),
            seed_demo: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Log {
    pub filter: String,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            filter: "info".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    pub server: Server,
    pub users: Users,
    pub log: Log,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_env(
            Environment::with_prefix("PLAYGROUND")
                .separator("__")
                .try_parsing(true),
        )
    }

    fn from_env(environment: Environment) -> Result<Self, ConfigError> {
        let defaults = Settings::default();
        Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("users.default_email", defaults.users.default_email)?
            .set_default("users.seed_demo", defaults.users.seed_demo)?
            .set_default("log.filter", defaults.log.filter)?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(environment)
            .build()?
            .try_deserialize()
    }
}
