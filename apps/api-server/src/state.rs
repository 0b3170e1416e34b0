//! Application state - shared across all handlers.

use std::fmt;
use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use blog_infra::PostgresPostRepository;

/// Which store backs the post repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::Postgres => "postgres",
            StoreKind::Memory => "memory",
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures that abort server startup.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Database migration failed: {0}")]
    Migration(String),

    #[error("A database URL is configured but the server was built without the postgres feature")]
    PostgresDisabled,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub store: StoreKind,
}

impl AppState {
    pub fn with_repository(posts: Arc<dyn PostRepository>, store: StoreKind) -> Self {
        Self { posts, store }
    }

    /// State over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryPostRepository::new()), StoreKind::Memory)
    }

    /// Build the application state with appropriate implementations.
    ///
    /// With a database configured, a failed connection or migration is fatal.
    /// Without one, the server runs on the in-memory store.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Result<Self, StartupError> {
        let Some(config) = db_config else {
            tracing::warn!("No database URL set. Running with the in-memory post store.");
            return Ok(Self::in_memory());
        };

        let state = Self::connect(config).await?;
        tracing::info!(store = %state.store, "Application state initialized");
        Ok(state)
    }

    #[cfg(feature = "postgres")]
    async fn connect(config: &DatabaseConfig) -> Result<Self, StartupError> {
        use migration::MigratorTrait;

        let conn = blog_infra::connect(config)
            .await
            .map_err(|e| StartupError::Connection(e.to_string()))?;

        if config.auto_migrate {
            migration::Migrator::up(&conn, None)
                .await
                .map_err(|e| StartupError::Migration(e.to_string()))?;
            tracing::info!("Database migrations applied");
        }

        Ok(Self::with_repository(
            Arc::new(PostgresPostRepository::new(conn)),
            StoreKind::Postgres,
        ))
    }

    #[cfg(not(feature = "postgres"))]
    async fn connect(_config: &DatabaseConfig) -> Result<Self, StartupError> {
        Err(StartupError::PostgresDisabled)
    }
}
