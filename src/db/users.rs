//! Database operations for users.

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DbErr, FromQueryResult};
use tracing::{debug, error};

use crate::entity::user;
use crate::error::{ErrorCode, RepoError, RepoResult};
use crate::models::User;

use super::classify::classify;
use super::statements;
use super::{DbPool, UserRepository};

/// [`UserRepository`] backed by the users table.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: DbPool,
}

impl PgUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Run an insert/update that returns the written row.
    async fn write_returning(
        &self,
        stmt: sea_orm::Statement,
        fallback: ErrorCode,
    ) -> RepoResult<User> {
        let row = self
            .pool
            .connection()
            .query_one_raw(stmt)
            .await
            .map_err(|e| classified_failure(fallback, e))?
            .ok_or_else(|| {
                failure(
                    fallback,
                    DbErr::RecordNotFound("statement returned no user row".to_string()),
                )
            })?;

        let model = user::Model::from_query_result(&row, "").map_err(|e| failure(fallback, e))?;
        Ok(model.into())
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn list_users(&self) -> RepoResult<Vec<User>> {
        let stmt = statements::list_users(self.pool.backend());
        let rows = self
            .pool
            .connection()
            .query_all_raw(stmt)
            .await
            .map_err(|e| failure(ErrorCode::UsersRepoGetAllUsersDbQueryFail, e))?;

        let mut users: Vec<User> = Vec::with_capacity(rows.len());
        for row in rows {
            match user::Model::from_query_result(&row, "") {
                Ok(model) => users.push(model.into()),
                // A bad row is skipped rather than returned zero-filled; the rest are still returned.
                Err(e) => error!(error = %e, "failed to scan user row"),
            }
        }

        debug!(count = users.len(), "Fetched users");
        Ok(users)
    }

    async fn create_user(&self, user: User) -> RepoResult<User> {
        let stmt = statements::insert_user(self.pool.backend(), &user);
        self.write_returning(stmt, ErrorCode::UsersRepoCreateUserDbQueryFail)
            .await
    }

    async fn update_user(&self, user: User) -> RepoResult<User> {
        let stmt = statements::update_user(self.pool.backend(), &user);
        self.write_returning(stmt, ErrorCode::UsersRepoUpdateUserDbQueryFail)
            .await
    }

    async fn delete_user(&self, user_id: i32) -> RepoResult<bool> {
        let stmt = statements::delete_user(self.pool.backend(), user_id);
        let result = self
            .pool
            .connection()
            .execute_raw(stmt)
            .await
            .map_err(|e| failure(ErrorCode::UsersRepoDeleteUserDbQueryFail, e))?;

        Ok(result.rows_affected() > 0)
    }
}

/// Log a failed operation and wrap it with its code.
fn failure(code: ErrorCode, source: DbErr) -> RepoError {
    error!(code = code.as_i32(), error = %source, "{}", code.message());
    RepoError::new(code, source)
}

/// Like [`failure`], but a recognised constraint or enum violation replaces `fallback`.
fn classified_failure(fallback: ErrorCode, source: DbErr) -> RepoError {
    let code = classify(&source).unwrap_or(fallback);
    failure(code, source)
}
