use std::collections::HashMap;

use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `postgres` or `memory`
    pub backend: String,
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Allowed origins; empty or `*` allows any origin
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: "postgres".to_string(),
            url: "postgres://localhost/portfolio".to_string(),
            max_connections: 20,
            min_connections: 1,
            connect_timeout_secs: 2,
            idle_timeout_secs: 30,
        }
    }
}

/// Plain deployment variables that win over everything else
const PORT_VAR: &str = "PORT";
const DATABASE_URL_VAR: &str = "DATABASE_URL";
const CORS_ORIGIN_VAR: &str = "CORS_ORIGIN";

impl AppConfig {
    /// Load from config files and the process environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_env(std::env::vars().collect())
    }

    /// Load from config files and the given environment map
    pub fn load_from_env(env: HashMap<String, String>) -> Result<Self, config::ConfigError> {
        let port = env.get(PORT_VAR).cloned();
        let database_url = env.get(DATABASE_URL_VAR).cloned();
        let cors_origins = env.get(CORS_ORIGIN_VAR).map(|v| parse_origins(v));

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .source(Some(env)),
            )
            .set_override_option("server.port", port)?
            .set_override_option("database.url", database_url)?
            .set_override_option("cors.allowed_origins", cors_origins)?
            .build()?;

        config.try_deserialize()
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
