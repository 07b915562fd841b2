//! Database connection pool management
//!
//! Connection pooling for PostgreSQL using SQLx, with pool sizing and
//! timeout knobs taken from [`DatabaseConfig`].

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use identity_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Database connection pool wrapper
#[derive(Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Create a new connection pool from configuration
    pub async fn new(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        tracing::info!(
            max_connections = config.max_connections,
            "creating database connection pool"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .test_before_acquire(true)
            .connect(&config.url)
            .await
            .map_err(|e| {
                InfrastructureError::Database(format!("failed to connect to database: {}", e))
            })?;

        Ok(Self { pool })
    }

    /// Create a pool from environment variables (`DATABASE_URL` and friends),
    /// loading a `.env` file when present. `DATABASE_URL` must be set.
    pub async fn from_env() -> Result<Self, InfrastructureError> {
        dotenvy::dotenv().ok();
        if std::env::var("DATABASE_URL").is_err() {
            return Err(InfrastructureError::Config(
                "DATABASE_URL is not set".to_string(),
            ));
        }
        Self::new(DatabaseConfig::from_env()).await
    }

    /// Apply any pending SQL migrations from the `migrations` directory
    pub async fn run_migrations(&self) -> Result<(), InfrastructureError> {
        tracing::info!(event = "migrations_started", "running database migrations");

        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| InfrastructureError::Database(format!("migration failed: {}", e)))?;

        tracing::info!(event = "migrations_completed", "database migrations completed");
        Ok(())
    }

    /// Verify the database is reachable
    pub async fn health_check(&self) -> Result<(), InfrastructureError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| InfrastructureError::Database(format!("health check failed: {}", e)))?;
        Ok(())
    }

    /// Access the underlying SQLx pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
