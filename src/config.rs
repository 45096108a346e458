use std::{env, time::Duration};

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use mealplanner_shared::shopping::ReplaceScope;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub shopping: ShoppingConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:mealplanner.db".to_owned(),
            max_connections: 5,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            issuer: None,
            audience: None,
            token_ttl_secs: default_token_ttl_secs(),
        }
    }
}

fn default_token_ttl_secs() -> u64 {
    7 * 24 * 60 * 60
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShoppingConfig {
    /// Rows removed before a generated list is written.
    #[serde(default)]
    pub replace_scope: ReplaceScope,
    #[serde(default = "default_generate_timeout_secs")]
    pub generate_timeout_secs: u64,
}

impl Default for ShoppingConfig {
    fn default() -> Self {
        Self {
            replace_scope: ReplaceScope::default(),
            generate_timeout_secs: default_generate_timeout_secs(),
        }
    }
}

impl ShoppingConfig {
    pub fn generate_timeout(&self) -> Duration {
        Duration::from_secs(self.generate_timeout_secs)
    }
}

fn default_generate_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit JSON lines instead of human readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_owned()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables (DATABASE_URL, JWT_SECRET)
    /// 2. Environment variables (MEALPLANNER__DATABASE__URL, etc.)
    /// 3. Config file specified by path
    /// 4. Defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "sqlite:mealplanner.db")?
            .set_default("database.max_connections", 5)?
            .set_default("shopping.replace_scope", "all")?
            .set_default("shopping.generate_timeout_secs", 30)?
            .set_default("observability.log_level", "info")?
            .set_default("observability.json", false)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_owned());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALPLANNER")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }
        if let Ok(jwt_secret) = env::var("JWT_SECRET") {
            builder = builder.set_override("auth.jwt_secret", jwt_secret)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.auth.jwt_secret.len() < 32 {
            return Err("JWT secret must be at least 32 characters long".to_owned());
        }
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_owned());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_owned());
        }
        if self.shopping.generate_timeout_secs == 0 {
            return Err("Shopping generate_timeout_secs must be greater than 0".to_owned());
        }
        Ok(())
    }
}
