//! Process configuration, read once from the environment at startup.

use std::env;

use thiserror::Error;

use crate::auth::adapter::outgoing::jwt::JwtConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ISSUER: &str = "portfolio-cms";
const DEFAULT_ACCESS_EXPIRY_SECS: i64 = 8 * 60 * 60;
const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("JWT_SECRET must be at least 32 characters")]
    WeakSecret,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argon2Settings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for Argon2Settings {
    fn default() -> Self {
        // Budget VPS friendly: 4MB memory, 3 iterations, 1 thread
        Self {
            memory_kib: 4 * 1024,
            iterations: 3,
            parallelism: 1,
        }
    }
}

impl Argon2Settings {
    pub fn from_lookup<F>(get: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            memory_kib: parse_or(
                "ARGON2_MEMORY_KIB",
                non_empty(get, "ARGON2_MEMORY_KIB"),
                defaults.memory_kib,
            )?,
            iterations: parse_or(
                "ARGON2_ITERATIONS",
                non_empty(get, "ARGON2_ITERATIONS"),
                defaults.iterations,
            )?,
            parallelism: parse_or(
                "ARGON2_PARALLELISM",
                non_empty(get, "ARGON2_PARALLELISM"),
                defaults.parallelism,
            )?,
        })
    }
}

/// What the `seed` binary needs: a database and the hashing cost. Token
/// settings are not read.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub database_url: Option<String>,
    pub argon2: Argon2Settings,
}

impl SeedConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database_url: non_empty(&get, "DATABASE_URL"),
            argon2: Argon2Settings::from_lookup(&get)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    /// `None` starts the server in degraded mode.
    pub database_url: Option<String>,
    pub auth_base_url: Option<String>,
    pub jwt: JwtConfig,
    pub argon2: Argon2Settings,
}

impl AppConfig {
    /// Load `.env.{RUST_ENV}` first, then fall back to `.env`.
    pub fn load_env_files() {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| non_empty(&get, key);

        let secret_key = var("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::WeakSecret);
        }

        Ok(Self {
            environment: var("RUST_ENV").unwrap_or_else(|| "development".to_string()),
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or("PORT", var("PORT"), DEFAULT_PORT)?,
            database_url: var("DATABASE_URL"),
            auth_base_url: var("AUTH_BASE_URL"),
            jwt: JwtConfig {
                secret_key,
                issuer: var("JWT_ISSUER").unwrap_or_else(|| DEFAULT_ISSUER.to_string()),
                access_token_expiry: parse_or(
                    "JWT_ACCESS_EXPIRY",
                    var("JWT_ACCESS_EXPIRY"),
                    DEFAULT_ACCESS_EXPIRY_SECS,
                )?,
            },
            argon2: Argon2Settings::from_lookup(&get)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Session cookies are marked `Secure` when the public base URL is https.
    pub fn secure_cookies(&self) -> bool {
        self.auth_base_url
            .as_deref()
            .is_some_and(|url| url.starts_with("https://"))
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn non_empty<F>(get: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    get(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
