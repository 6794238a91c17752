use sqlx::{
    Pool, Postgres,
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
};
use std::time::Duration;
use tracing::info;

pub type ConnectionPool = Pool<Postgres>;

/// The store always listens on the standard PostgreSQL port.
pub const DATABASE_PORT: u16 = 5432;

#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub database: String,
    pub user: String,
    pub password: String,
    pub min_conn: u32,
    pub max_conn: u32,
    pub acquire_timeout: Duration,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"***")
            .field("min_conn", &self.min_conn)
            .field("max_conn", &self.max_conn)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

impl DatabaseConfig {
    /// TLS is mandatory and the server certificate is verified against the host name.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(DATABASE_PORT)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
            .ssl_mode(PgSslMode::VerifyFull)
    }

    pub fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .min_connections(self.min_conn)
            .max_connections(self.max_conn)
            .acquire_timeout(self.acquire_timeout)
    }
}

pub struct ConnectionManager;

impl ConnectionManager {
    pub async fn new_pool(config: &DatabaseConfig) -> anyhow::Result<ConnectionPool> {
        info!(
            "🔌 Connecting to database {} on {}:{} (max {} connections)",
            config.database, config.host, DATABASE_PORT, config.max_conn
        );

        let pool = config
            .pool_options()
            .connect_with(config.connect_options())
            .await
            .map_err(|err| anyhow::anyhow!("Failed to create database connection pool: {}", err))?;

        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DatabaseConfig {
        DatabaseConfig {
            host: "db.internal".into(),
            database: "shop".into(),
            user: "cart".into(),
            password: "hunter2".into(),
            min_conn: 0,
            max_conn: 4,
            acquire_timeout: Duration::from_secs(3),
        }
    }

    #[test]
    fn connect_options_use_fixed_port_and_verified_tls() {
        let options = config().connect_options();

        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), DATABASE_PORT);
        assert_eq!(options.get_database(), Some("shop"));
        assert_eq!(options.get_username(), "cart");
        assert!(matches!(options.get_ssl_mode(), PgSslMode::VerifyFull));
    }

    #[test]
    fn debug_output_hides_password() {
        let rendered = format!("{:?}", config());

        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("***"));
    }
}
