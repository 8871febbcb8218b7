use chrono::Duration;
use std::collections::HashMap;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

const DEV_SECRET_KEY: &str = "dev-secret-key-change-in-production";
const DEV_DATABASE_URL: &str = "sqlite:instance/daily_diet.db";
const TEST_DATABASE_URL: &str = "sqlite::memory:";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("{0} must be set in production")]
    Missing(&'static str),

    #[error("Invalid {key} value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("SECRET_KEY must be changed from the development default in production")]
    InsecureSecret,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
    Testing,
}

impl AppEnv {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        }
    }
}

impl FromStr for AppEnv {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            "testing" | "test" => Ok(Self::Testing),
            other => Err(format!(
                "unknown environment '{}', expected development, production or testing",
                other
            )),
        }
    }
}

impl Display for AppEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime configuration read from the environment
#[derive(Debug, Clone)]
pub struct Settings {
    pub env: AppEnv,
    pub database_url: String,
    pub secret_key: String,
    pub host: String,
    pub port: u16,
    pub log_dir: PathBuf,
    pub access_token_ttl: Duration,
}

impl Settings {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => warn!("Failed to read .env file: {}", e),
        }

        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let env: AppEnv = parse_or("APP_ENV", &lookup, AppEnv::Development)?;

        let database_url = match (lookup("DATABASE_URL"), env) {
            (Some(url), _) => url,
            (None, AppEnv::Development) => DEV_DATABASE_URL.to_string(),
            (None, AppEnv::Testing) => TEST_DATABASE_URL.to_string(),
            (None, AppEnv::Production) => return Err(SettingsError::Missing("DATABASE_URL")),
        };

        let secret_key = match lookup("SECRET_KEY") {
            Some(key) if env == AppEnv::Production && key == DEV_SECRET_KEY => {
                return Err(SettingsError::InsecureSecret)
            }
            Some(key) if key.is_empty() => {
                return Err(SettingsError::Invalid {
                    key: "SECRET_KEY",
                    value: key,
                    reason: "must not be empty".to_string(),
                })
            }
            Some(key) => key,
            None if env == AppEnv::Production => return Err(SettingsError::Missing("SECRET_KEY")),
            None => {
                warn!("SECRET_KEY not set, using the development default");
                DEV_SECRET_KEY.to_string()
            }
        };

        let ttl_minutes: i64 = parse_or("ACCESS_TOKEN_TTL_MINUTES", &lookup, 60)?;
        if ttl_minutes <= 0 {
            return Err(SettingsError::Invalid {
                key: "ACCESS_TOKEN_TTL_MINUTES",
                value: ttl_minutes.to_string(),
                reason: "must be positive".to_string(),
            });
        }

        Ok(Self {
            env,
            database_url,
            secret_key,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or("PORT", &lookup, 5000)?,
            log_dir: lookup("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("logs")),
            access_token_ttl: Duration::minutes(ttl_minutes),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(
    key: &'static str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: T,
) -> Result<T, SettingsError>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| SettingsError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
