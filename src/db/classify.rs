//! Classification of store errors into user error codes.
//!
//! PostgreSQL reports constraint and enum violations through SQLSTATE codes.
//! The constraint name is used when the driver exposes it; otherwise the
//! message text decides which column was involved.

use sea_orm::{DbErr, RuntimeErr};

use crate::error::ErrorCode;

/// SQLSTATE `unique_violation`.
pub const UNIQUE_VIOLATION: &str = "23505";

/// SQLSTATE `invalid_text_representation`, raised for unknown enum labels.
pub const INVALID_TEXT_REPRESENTATION: &str = "22P02";

/// Structured view of a database-reported error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDescriptor {
    pub code: String,
    pub message: String,
    pub constraint: Option<String>,
}

impl ErrorDescriptor {
    /// Extract the descriptor from a driver error, if the database produced one.
    pub fn from_db_err(err: &DbErr) -> Option<Self> {
        let runtime = match err {
            DbErr::Query(e) | DbErr::Exec(e) | DbErr::Conn(e) => e,
            _ => return None,
        };
        let RuntimeErr::SqlxError(sqlx_err) = runtime else {
            return None;
        };
        let db_err = sqlx_err.as_database_error()?;

        Some(Self {
            code: db_err.code()?.into_owned(),
            message: db_err.message().to_string(),
            constraint: db_err.constraint().map(str::to_string),
        })
    }

    /// Text the column match runs against: constraint name first, then message.
    fn mentions(&self, needle: &str) -> bool {
        self.constraint
            .as_deref()
            .is_some_and(|constraint| constraint.contains(needle))
            || self.message.contains(needle)
    }

    /// Code for this descriptor, or `None` when it is not a known user error.
    pub fn classify(&self) -> Option<ErrorCode> {
        match self.code.as_str() {
            UNIQUE_VIOLATION => {
                if self.mentions("user_name") {
                    Some(ErrorCode::UsersRepoUserDuplicateUsername)
                } else if self.mentions("email") {
                    Some(ErrorCode::UsersRepoUserDuplicateEmail)
                } else {
                    None
                }
            }
            INVALID_TEXT_REPRESENTATION if self.message.contains("user_status") => {
                Some(ErrorCode::UsersRepoUserInvalidUserStatus)
            }
            _ => None,
        }
    }
}

/// Classify a store error. `None` means the caller falls back to its generic code.
pub fn classify(err: &DbErr) -> Option<ErrorCode> {
    ErrorDescriptor::from_db_err(err)?.classify()
}
