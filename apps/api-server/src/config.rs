//! Application configuration loaded from environment variables.

use std::env;

use posts_infra::DatabaseConfig;

/// Configuration errors - any of these aborts startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }

    /// Whether failure messages of unexpected errors are sent to clients.
    pub fn exposes_error_details(self) -> bool {
        self != Environment::Production
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    /// Single allowed CORS origin; `None` allows any origin.
    pub frontend_origin: Option<String>,
    pub environment: Environment,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset.
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let port_raw = require("PORT")?;
        let port = port_raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: port_raw.clone(),
            })?;

        let mut database = DatabaseConfig::new(
            require("SUPABASE_URL")?.trim(),
            require("SUPABASE_ANON_KEY")?.trim(),
        );
        if let Some(table) = get("POSTS_TABLE") {
            database = database.with_table(table.trim());
        }

        let frontend_origin = get("FRONTEND_URL")
            .map(|origin| origin.trim().trim_end_matches('/').to_string())
            .filter(|origin| origin != "*");

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            database,
            frontend_origin,
            environment: get("APP_ENV")
                .map(|v| Environment::parse(&v))
                .unwrap_or(Environment::Development),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("SUPABASE_URL", "https://abc.supabase.co"),
        ("SUPABASE_ANON_KEY", "anon"),
        ("PORT", "3000"),
    ];

    #[test]
    fn test_defaults() {
        let config = load(&REQUIRED).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.database.endpoint(), "https://abc.supabase.co/rest/v1/posts");
        assert!(config.frontend_origin.is_none());
        assert_eq!(config.environment, Environment::Development);
        assert!(config.environment.exposes_error_details());
    }

    #[test]
    fn test_missing_required_values() {
        for skipped in ["SUPABASE_URL", "SUPABASE_ANON_KEY", "PORT"] {
            let vars: Vec<_> = REQUIRED.iter().copied().filter(|(k, _)| *k != skipped).collect();
            match load(&vars) {
                Err(ConfigError::Missing(name)) => assert_eq!(name, skipped),
                other => panic!("expected missing {skipped}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_blank_value_is_missing() {
        let mut vars = REQUIRED.to_vec();
        vars[1] = ("SUPABASE_ANON_KEY", "   ");
        assert!(matches!(load(&vars), Err(ConfigError::Missing("SUPABASE_ANON_KEY"))));
    }

    #[test]
    fn test_invalid_port() {
        let mut vars = REQUIRED.to_vec();
        vars[2] = ("PORT", "eighty");
        assert!(matches!(load(&vars), Err(ConfigError::Invalid { name: "PORT", .. })));
    }

    #[test]
    fn test_optional_values() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("FRONTEND_URL", "https://app.example.com/"));
        vars.push(("APP_ENV", "Production"));
        vars.push(("POSTS_TABLE", "articles"));
        vars.push(("HOST", "127.0.0.1"));

        let config = load(&vars).unwrap();
        assert_eq!(config.frontend_origin.as_deref(), Some("https://app.example.com"));
        assert_eq!(config.environment, Environment::Production);
        assert!(!config.environment.exposes_error_details());
        assert_eq!(config.database.table, "articles");
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_wildcard_origin_means_any() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("FRONTEND_URL", "*"));
        assert!(load(&vars).unwrap().frontend_origin.is_none());
    }
}
