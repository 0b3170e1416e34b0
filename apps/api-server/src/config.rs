//! Application configuration loaded from environment variables.

use std::env;

use blog_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
}

/// Which environment variable holds the store connection string.
///
/// Test runs (`APP_ENV=test`) never touch the runtime database.
pub fn database_url_var(app_env: Option<&str>) -> &'static str {
    match app_env.map(str::to_ascii_lowercase).as_deref() {
        Some("test") => "TEST_DATABASE_URL",
        _ => "DATABASE_URL",
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").ok();
        Self::from_env_with_url_var(database_url_var(app_env.as_deref()))
    }

    /// Load configuration for a test run: the store URL comes from `TEST_DATABASE_URL`.
    pub fn for_tests() -> Self {
        Self::from_env_with_url_var(database_url_var(Some("test")))
    }

    fn from_env_with_url_var(url_var: &str) -> Self {
        let database = env::var(url_var)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .map(|url| {
                let defaults = DatabaseConfig::new(url);
                DatabaseConfig {
                    max_connections: parse_var("DB_MAX_CONNECTIONS")
                        .unwrap_or(defaults.max_connections),
                    min_connections: parse_var("DB_MIN_CONNECTIONS")
                        .unwrap_or(defaults.min_connections),
                    auto_migrate: env::var("DB_AUTO_MIGRATE")
                        .map(|v| parse_flag(&v))
                        .unwrap_or(defaults.auto_migrate),
                    ..defaults
                }
            });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            database,
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

fn parse_flag(value: &str) -> bool {
    !matches!(value.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no" | "off")
}
