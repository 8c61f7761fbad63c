use std::path::PathBuf;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub app_key: String,
    /// Public base URL used to build upload links.
    pub api_url: String,
    pub upload_dir: PathBuf,
    pub run_migrations: bool,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

impl AppConfig {
    pub const DEFAULT_UPLOAD_DIR: &'static str = "public/uploads";
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 50;
    pub const DEFAULT_MIN_CONNECTIONS: u32 = 10;

    /// Loads `.env.{RUST_ENV}` when present, else `.env`.
    pub fn load_dotenv() {
        let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let database_url = require("DATABASE_URL")?;
        let host = require("HOST")?;
        let port = parse_or(&get, "PORT", None)?;
        let app_key = require("APP_KEY")?;

        let api_url = get("API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| format!("http://{host}:{port}"));

        let upload_dir = PathBuf::from(
            get("UPLOAD_DIR").unwrap_or_else(|| Self::DEFAULT_UPLOAD_DIR.to_string()),
        );

        let run_migrations = match get("RUN_MIGRATIONS") {
            None => false,
            Some(v) => match v.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "RUN_MIGRATIONS",
                        value: v,
                    })
                }
            },
        };

        let db_max_connections =
            parse_or(&get, "DB_MAX_CONNECTIONS", Some(Self::DEFAULT_MAX_CONNECTIONS))?;
        let db_min_connections =
            parse_or(&get, "DB_MIN_CONNECTIONS", Some(Self::DEFAULT_MIN_CONNECTIONS))?;

        if db_min_connections > db_max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                value: db_min_connections.to_string(),
            });
        }

        Ok(Self {
            database_url,
            host,
            port,
            app_key,
            api_url,
            upload_dir,
            run_migrations,
            db_max_connections,
            db_min_connections,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<G, T>(get: &G, key: &'static str, default: Option<T>) -> Result<T, ConfigError>
where
    G: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => default.ok_or(ConfigError::Missing(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn minimal() -> Vec<(&'static str, &'static str)> {
        vec![
            ("DATABASE_URL", "postgres://localhost/portfolio"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("APP_KEY", "secret"),
        ]
    }

    #[test]
    fn test_minimal_env_uses_defaults() {
        let cfg = AppConfig::from_source(source(&minimal())).unwrap();

        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.api_url, "http://127.0.0.1:8080");
        assert_eq!(cfg.upload_dir, PathBuf::from("public/uploads"));
        assert!(!cfg.run_migrations);
        assert_eq!(cfg.db_max_connections, 50);
        assert_eq!(cfg.db_min_connections, 10);
        assert_eq!(cfg.server_url(), "127.0.0.1:8080");
    }

    #[test]
    fn test_missing_app_key() {
        let vars: Vec<_> = minimal().into_iter().filter(|(k, _)| *k != "APP_KEY").collect();
        let err = AppConfig::from_source(source(&vars)).unwrap_err();
        assert_eq!(err, ConfigError::Missing("APP_KEY"));
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let mut vars: Vec<_> = minimal()
            .into_iter()
            .filter(|(k, _)| *k != "DATABASE_URL")
            .collect();
        vars.push(("DATABASE_URL", "   "));
        let err = AppConfig::from_source(source(&vars)).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn test_invalid_port() {
        let mut vars: Vec<_> = minimal().into_iter().filter(|(k, _)| *k != "PORT").collect();
        vars.push(("PORT", "eighty"));
        let err = AppConfig::from_source(source(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let mut vars = minimal();
        vars.push(("API_URL", "https://api.example.com/"));
        vars.push(("UPLOAD_DIR", "/var/lib/portfolio/uploads"));
        vars.push(("RUN_MIGRATIONS", "TRUE"));
        vars.push(("DB_MAX_CONNECTIONS", "5"));
        vars.push(("DB_MIN_CONNECTIONS", "1"));

        let cfg = AppConfig::from_source(source(&vars)).unwrap();
        assert_eq!(cfg.api_url, "https://api.example.com");
        assert_eq!(cfg.upload_dir, PathBuf::from("/var/lib/portfolio/uploads"));
        assert!(cfg.run_migrations);
        assert_eq!(cfg.db_max_connections, 5);
        assert_eq!(cfg.db_min_connections, 1);
    }

    #[test]
    fn test_min_above_max_rejected() {
        let mut vars = minimal();
        vars.push(("DB_MAX_CONNECTIONS", "2"));
        vars.push(("DB_MIN_CONNECTIONS", "4"));
        let err = AppConfig::from_source(source(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DB_MIN_CONNECTIONS", .. }));
    }

    #[test]
    fn test_invalid_run_migrations_flag() {
        let mut vars = minimal();
        vars.push(("RUN_MIGRATIONS", "maybe"));
        let err = AppConfig::from_source(source(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "RUN_MIGRATIONS", .. }));
    }
}
