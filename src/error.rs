//! Error codes and error types for the user records server.
//!
//! Every failure surfaced to a client carries an [`ErrorCode`]. The numeric
//! values are part of the public contract: clients branch on them, so new
//! codes are only ever appended.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::api::response::ApiResponse;

/// Client-facing error codes, numbered from 10000 in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    DbRepoFailedToInitialize = 10000,

    UsersRepoGetAllUsersDbQueryFail,
    UsersRepoCreateUserDbQueryFail,
    UsersRepoUserDuplicateUsername,
    UsersRepoUserDuplicateEmail,
    UsersRepoUserInvalidUserStatus,
    UsersRepoUpdateUserDbQueryFail,
    UsersRepoUpdateInvalidUserId,
    UsersRepoDeleteUserDbQueryFail,

    UsersControllerUserFailedToBindBody,
    UsersControllerInvalidUserIdParam,
}

impl ErrorCode {
    /// All codes in declaration order.
    pub const ALL: [ErrorCode; 11] = [
        Self::DbRepoFailedToInitialize,
        Self::UsersRepoGetAllUsersDbQueryFail,
        Self::UsersRepoCreateUserDbQueryFail,
        Self::UsersRepoUserDuplicateUsername,
        Self::UsersRepoUserDuplicateEmail,
        Self::UsersRepoUserInvalidUserStatus,
        Self::UsersRepoUpdateUserDbQueryFail,
        Self::UsersRepoUpdateInvalidUserId,
        Self::UsersRepoDeleteUserDbQueryFail,
        Self::UsersControllerUserFailedToBindBody,
        Self::UsersControllerInvalidUserIdParam,
    ];

    /// Numeric value sent to clients.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Client message for this code.
    pub fn message(self) -> &'static str {
        match self {
            Self::DbRepoFailedToInitialize => "failed to initialize DB",
            Self::UsersRepoGetAllUsersDbQueryFail => "failed to get users from records",
            Self::UsersRepoCreateUserDbQueryFail => "failed to create user in records",
            Self::UsersRepoUserDuplicateUsername => "user with username already exists",
            Self::UsersRepoUserDuplicateEmail => "user with email already exists",
            Self::UsersRepoUserInvalidUserStatus => "input for user_status is invalid",
            Self::UsersRepoUpdateUserDbQueryFail => "failed to update user in records",
            Self::UsersRepoUpdateInvalidUserId => "user Id is required to update the user",
            Self::UsersRepoDeleteUserDbQueryFail => "failed to delete user from records",
            Self::UsersControllerUserFailedToBindBody => "user input body is invalid",
            Self::UsersControllerInvalidUserIdParam => "user id passed as URL param is invalid",
        }
    }

    /// Reverse lookup of a code by its client message.
    pub fn from_message(message: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.message() == message)
    }

    /// HTTP status a response carrying this code is sent with.
    pub fn status(self) -> StatusCode {
        match self {
            Self::UsersRepoUserDuplicateUsername | Self::UsersRepoUserDuplicateEmail => {
                StatusCode::CONFLICT
            }
            Self::UsersRepoUpdateInvalidUserId
            | Self::UsersControllerUserFailedToBindBody
            | Self::UsersControllerInvalidUserIdParam => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i32())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.as_i32())
    }
}

/// A failed data-access operation: the code to report and the store error behind it.
#[derive(Debug, thiserror::Error)]
#[error("code {code}: {}", .code.message())]
pub struct RepoError {
    pub code: ErrorCode,
    #[source]
    pub source: DbErr,
}

impl RepoError {
    pub fn new(code: ErrorCode, source: DbErr) -> Self {
        Self { code, source }
    }
}

/// Convenience type alias for repository results.
pub type RepoResult<T> = Result<T, RepoError>;

/// Application-level errors returned by HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Data-access operation failed
    #[error(transparent)]
    Repo(#[from] RepoError),

    /// Request rejected before reaching the data-access layer
    #[error("{}", .code.message())]
    InvalidInput {
        code: ErrorCode,
        detail: Option<String>,
    },
}

impl AppError {
    pub fn invalid_input(code: ErrorCode) -> Self {
        Self::InvalidInput { code, detail: None }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Repo(err) => err.code,
            Self::InvalidInput { code, .. } => *code,
        }
    }

    /// Message placed in the response envelope.
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidInput {
                code,
                detail: Some(detail),
            } => format!("{}. {}", code.message(), detail),
            _ => self.code().message().to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.code().status()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(ApiResponse::<()>::failure(self.code(), self.client_message()))
    }
}

/// Convenience type alias for handler results.
pub type AppResult<T> = Result<T, AppError>;
