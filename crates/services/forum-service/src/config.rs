//! Forum service configuration.

use std::env;

use common::{DatabaseConfig, ServiceConfig};

/// Forum service configuration.
#[derive(Debug, Clone, Default)]
pub struct ForumServiceConfig {
    pub service: ServiceConfig,
    pub database: DatabaseConfig,
}

impl ForumServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = DatabaseConfig::default();

        Self {
            service: ServiceConfig {
                log_level: env::var("FORUM_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            database: DatabaseConfig {
                url: env::var("FORUM_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.url),
                max_connections: parse_var("FORUM_DB_MAX_CONNECTIONS")
                    .unwrap_or(defaults.max_connections),
                min_connections: parse_var("FORUM_DB_MIN_CONNECTIONS")
                    .unwrap_or(defaults.min_connections),
                connect_timeout_seconds: parse_var("FORUM_DB_CONNECT_TIMEOUT_SECONDS")
                    .unwrap_or(defaults.connect_timeout_seconds),
            },
        }
    }

    /// Override the database URL (e.g. from a CLI flag).
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database.url = url.into();
        self
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_database_url() {
        let config = ForumServiceConfig::default().with_database_url("sqlite::memory:");
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.database.max_connections, 10);
    }
}
