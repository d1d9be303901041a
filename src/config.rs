use crate::auth::JwtSettings;
use std::env;
use thiserror::Error;

const DEFAULT_JWT_SECRET: &str = "default-secret-change-me";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    MongoDB { database_url: String },
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub store_backend: StoreBackend,
    pub jwt: JwtSettings,
    pub seed_demo_data: bool,
    pub dev_tokens_enabled: bool,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Reads the configuration from the process environment (after `.env`
    /// has been loaded).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = parse("PORT", var("PORT", "3002"))?;

        let store_backend = match var("STORE_BACKEND", "mongodb").to_lowercase().as_str() {
            "mongodb" | "mongo" => StoreBackend::MongoDB {
                database_url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            },
            "memory" => StoreBackend::Memory,
            other => {
                return Err(ConfigError::Invalid {
                    name: "STORE_BACKEND",
                    value: other.to_string(),
                })
            }
        };

        let secret = var("JWT_SECRET", DEFAULT_JWT_SECRET);
        if secret == DEFAULT_JWT_SECRET {
            log::warn!("⚠️  JWT_SECRET not set, using the default development secret");
        }

        let jwt = JwtSettings {
            secret,
            issuer: var("JWT_ISSUER", "trip-service"),
            audience: var("JWT_AUDIENCE", "trip-api"),
            ttl_hours: parse("JWT_TTL_HOURS", var("JWT_TTL_HOURS", "24"))?,
        };

        let cors_allowed_origins = var("CORS_ALLOWED_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            host: var("HOST", "0.0.0.0"),
            port,
            store_backend,
            jwt,
            seed_demo_data: parse("SEED_DEMO_DATA", var("SEED_DEMO_DATA", "false"))?,
            dev_tokens_enabled: parse("DEV_TOKENS_ENABLED", var("DEV_TOKENS_ENABLED", "false"))?,
            cors_allowed_origins,
        })
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}
