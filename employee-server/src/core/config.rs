use std::str::FromStr;
use std::time::Duration;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 8080 | HTTP listen port |
/// | DATABASE_URL | rocksdb://./data/company.db | storage connection string |
/// | DB_NAMESPACE | company | SurrealDB namespace |
/// | DB_NAME | new_company | logical database |
/// | DB_USER / DB_PASS | unset | root credentials for remote engines |
/// | ALLOWED_ORIGIN | http://localhost:5173 | the only CORS origin |
/// | CREATE_TIMEOUT_MS | 5000 | budget for creating an employee |
/// | LIST_TIMEOUT_MS | 10000 | budget for listing employees |
/// | CONNECT_TIMEOUT_MS | 10000 | budget for the startup connection |
/// | LOG_LEVEL | info | tracing level |
/// | LOG_DIR | unset | daily-rotated log file directory |
/// | ENVIRONMENT | development | deployment label |
///
/// # Example
///
/// ```ignore
/// DATABASE_URL=mem:// HTTP_PORT=9000 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Storage connection string (`rocksdb://path`, `mem://`, `ws://host:port`)
    pub database_url: String,
    pub db_namespace: String,
    pub db_name: String,
    pub db_user: Option<String>,
    pub db_pass: Option<String>,
    /// Sole origin allowed to make browser requests
    pub allowed_origin: String,
    pub create_timeout_ms: u64,
    pub list_timeout_ms: u64,
    pub connect_timeout_ms: u64,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, defaulting unset ones
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            http_port: parse_or(&lookup, "HTTP_PORT", 8080),
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "rocksdb://./data/company.db".into()),
            db_namespace: lookup("DB_NAMESPACE").unwrap_or_else(|| "company".into()),
            db_name: lookup("DB_NAME").unwrap_or_else(|| "new_company".into()),
            db_user: lookup("DB_USER"),
            db_pass: lookup("DB_PASS"),
            allowed_origin: lookup("ALLOWED_ORIGIN")
                .unwrap_or_else(|| "http://localhost:5173".into()),
            create_timeout_ms: parse_or(&lookup, "CREATE_TIMEOUT_MS", 5000),
            list_timeout_ms: parse_or(&lookup, "LIST_TIMEOUT_MS", 10000),
            connect_timeout_ms: parse_or(&lookup, "CONNECT_TIMEOUT_MS", 10000),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR"),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        }
    }

    /// Defaults with a custom store and port
    ///
    /// Mostly used by tests
    pub fn with_overrides(database_url: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_lookup(|_| None);
        config.database_url = database_url.into();
        config.http_port = http_port;
        config
    }

    pub fn create_timeout(&self) -> Duration {
        Duration::from_millis(self.create_timeout_ms)
    }

    pub fn list_timeout(&self) -> Duration {
        Duration::from_millis(self.list_timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.db_name, "new_company");
        assert_eq!(config.allowed_origin, "http://localhost:5173");
        assert_eq!(config.create_timeout(), Duration::from_secs(5));
        assert_eq!(config.list_timeout(), Duration::from_secs(10));
        assert!(config.db_user.is_none());
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_overrides_from_lookup() {
        let config = config_from(&[
            ("HTTP_PORT", "9000"),
            ("DATABASE_URL", "mem://"),
            ("CREATE_TIMEOUT_MS", "250"),
            ("ENVIRONMENT", "production"),
        ]);
        assert_eq!(config.http_port, 9000);
        assert_eq!(config.database_url, "mem://");
        assert_eq!(config.create_timeout(), Duration::from_millis(250));
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn test_unparsable_numbers_fall_back() {
        let config = config_from(&[("HTTP_PORT", "eighty"), ("LIST_TIMEOUT_MS", "-1")]);
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.list_timeout_ms, 10000);
    }
}
