//! Application configuration loaded via OrthoConfig, plus the server
//! construction parameters derived from it.

use std::net::SocketAddr;

use backend::outbound::persistence::DbPool;
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Configuration values read from the environment, CLI, or config file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PORTFOLIO")]
pub struct AppConfig {
    /// MySQL connection URL. When absent the server runs on the built-in
    /// sample content instead of a database.
    pub database_url: Option<String>,
    /// Socket address to bind, e.g. `0.0.0.0:8080`.
    pub bind_addr: Option<String>,
    /// Maximum connections held by the database pool.
    pub pool_max_size: Option<u32>,
}

impl AppConfig {
    /// Parsed bind address, falling back to the default.
    ///
    /// # Errors
    /// Returns [`std::net::AddrParseError`] when the configured address is
    /// not a valid socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
    }

    /// Configured pool size, falling back to the default.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration binding the given address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
        }
    }

    /// Attach a database connection pool for the persistence adapters.
    ///
    /// Without a pool the server serves the built-in sample content and
    /// discards contact submissions.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> AppConfig {
        AppConfig::load_from_iter([OsString::from("backend")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_environment_is_empty() {
        let _guard = lock_env([
            ("PORTFOLIO_DATABASE_URL", None::<String>),
            ("PORTFOLIO_BIND_ADDR", None::<String>),
            ("PORTFOLIO_POOL_MAX_SIZE", None::<String>),
        ]);

        let config = load_from_empty_args();
        assert!(config.database_url.is_none());
        assert_eq!(
            config.bind_addr().expect("default parses"),
            "0.0.0.0:8080".parse().expect("literal parses")
        );
        assert_eq!(config.pool_max_size(), DEFAULT_POOL_MAX_SIZE);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "PORTFOLIO_DATABASE_URL",
                Some("mysql://portfolio@localhost/portfolio".to_owned()),
            ),
            ("PORTFOLIO_BIND_ADDR", Some("127.0.0.1:9090".to_owned())),
            ("PORTFOLIO_POOL_MAX_SIZE", Some("4".to_owned())),
        ]);

        let config = load_from_empty_args();
        assert_eq!(
            config.database_url.as_deref(),
            Some("mysql://portfolio@localhost/portfolio")
        );
        assert_eq!(
            config.bind_addr().expect("override parses"),
            "127.0.0.1:9090".parse().expect("literal parses")
        );
        assert_eq!(config.pool_max_size(), 4);
    }

    #[rstest]
    fn malformed_bind_addr_is_an_error() {
        let _guard = lock_env([("PORTFOLIO_BIND_ADDR", Some("not-an-address".to_owned()))]);

        let config = load_from_empty_args();
        assert!(config.bind_addr().is_err());
    }
}
