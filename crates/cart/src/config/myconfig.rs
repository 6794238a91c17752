use anyhow::{Context, Result, anyhow};
use shared::config::DatabaseConfig;
use std::{str::FromStr, time::Duration};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DB_MAX_CONN: u32 = 10;
const DEFAULT_DB_MIN_CONN: u32 = 0;
const DEFAULT_DB_ACQUIRE_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database: DatabaseConfig,
    pub run_migrations: bool,
    pub is_dev: bool,
    pub is_enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; `init` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key).ok_or_else(|| anyhow!("Missing environment variable: {key}"))
        };

        let host = required("PGHOST")?;
        let database = required("PGDATABASE")?;
        let user = required("PGUSER")?;
        let password = required("PGPASSWORD")?;

        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let max_conn = parse_or(&lookup, "DB_MAX_CONN", DEFAULT_DB_MAX_CONN)?;
        let min_conn = parse_or(&lookup, "DB_MIN_CONN", DEFAULT_DB_MIN_CONN)?;
        let acquire_timeout_secs = parse_or(
            &lookup,
            "DB_ACQUIRE_TIMEOUT_SECS",
            DEFAULT_DB_ACQUIRE_TIMEOUT_SECS,
        )?;

        if max_conn == 0 {
            return Err(anyhow!("DB_MAX_CONN must be at least 1"));
        }
        if min_conn > max_conn {
            return Err(anyhow!(
                "DB_MIN_CONN ({min_conn}) must not exceed DB_MAX_CONN ({max_conn})"
            ));
        }

        let run_migrations = match lookup("RUN_MIGRATIONS").as_deref() {
            None | Some("true") => true,
            Some("false") => false,
            Some(other) => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let is_dev = lookup("DEV_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        let is_enable_file_log = lookup("ENABLE_FILE_LOG")
            .map(|v| v == "true")
            .unwrap_or(false);

        Ok(Self {
            port,
            database: DatabaseConfig {
                host,
                database,
                user,
                password,
                min_conn,
                max_conn,
                acquire_timeout: Duration::from_secs(acquire_timeout_secs),
            },
            run_migrations,
            is_dev,
            is_enable_file_log,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid {}", std::any::type_name::<T>())),
        None => Ok(default),
    }
}
