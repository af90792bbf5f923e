//! Database module providing connection management and user data access.

pub mod classify;
pub mod statements;
pub mod users;

use std::time::Duration;

use async_trait::async_trait;
use sea_orm::{ConnectOptions, Database, DatabaseBackend, DatabaseConnection, DbErr};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::error::RepoResult;
use crate::models::User;

pub use users::PgUserRepository;

/// Data-access contract for user records.
///
/// Every call runs exactly one statement. Failures carry the error code to
/// report; a delete that matches no row is not a failure.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// All users, in the store's default order.
    async fn list_users(&self) -> RepoResult<Vec<User>>;

    /// Insert a user and return it with its assigned id.
    async fn create_user(&self, user: User) -> RepoResult<User>;

    /// Apply a partial update to the user with `user.user_id`.
    async fn update_user(&self, user: User) -> RepoResult<User>;

    /// Remove a user. `Ok(false)` when no row had that id.
    async fn delete_user(&self, user_id: i32) -> RepoResult<bool>;
}

/// Database connection pool wrapper.
#[derive(Clone)]
pub struct DbPool {
    conn: DatabaseConnection,
}

impl DbPool {
    /// Connect to PostgreSQL and verify the connection.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let mut opts = ConnectOptions::new(config.url());
        opts.max_connections(config.max_idle_connections)
            .idle_timeout(config.idle_timeout())
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .sqlx_logging(false);

        let conn = Database::connect(opts).await?;
        conn.ping().await?;

        info!(
            host = %config.host,
            database = %config.name,
            max_connections = config.max_idle_connections,
            "Successfully connected to database"
        );

        Ok(Self { conn })
    }

    /// Wrap an existing connection.
    pub fn from_connection(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    pub fn backend(&self) -> DatabaseBackend {
        self.conn.get_database_backend()
    }
}
