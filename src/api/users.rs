//! User record API handlers.

use actix_web::{HttpResponse, web};
use tracing::{info, warn};

use crate::api::response::ApiResponse;
use crate::db::UserRepository;
use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::User;

/// Unwrap a JSON body, turning an extraction failure into the bind error.
///
/// With `with_detail`, the parser message is appended to the client message.
fn bind_user(
    body: Result<web::Json<User>, actix_web::Error>,
    with_detail: bool,
) -> AppResult<User> {
    match body {
        Ok(json) => Ok(json.into_inner()),
        Err(e) => {
            let code = ErrorCode::UsersControllerUserFailedToBindBody;
            warn!(code = code.as_i32(), error = %e, "{}", code.message());
            Err(AppError::InvalidInput {
                code,
                detail: with_detail.then(|| e.to_string()),
            })
        }
    }
}

/// List all users.
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All stored users", body = ApiResponse<Vec<User>>),
        (status = 500, description = "Query failed", body = ApiResponse<i32>),
    )
)]
pub async fn list_users(repo: web::Data<dyn UserRepository>) -> AppResult<HttpResponse> {
    let users = repo.list_users().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(users)))
}

/// Create a user. Any `user_id` in the body is ignored.
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = User,
    responses(
        (status = 200, description = "User created", body = ApiResponse<User>),
        (status = 400, description = "Body could not be parsed", body = ApiResponse<i32>),
        (status = 409, description = "Username or email already taken", body = ApiResponse<i32>),
        (status = 500, description = "Insert failed", body = ApiResponse<i32>),
    )
)]
pub async fn create_user(
    repo: web::Data<dyn UserRepository>,
    body: Result<web::Json<User>, actix_web::Error>,
) -> AppResult<HttpResponse> {
    let user = bind_user(body, false)?;
    let created = repo.create_user(user).await?;

    info!(user_id = created.user_id, "Created user");
    Ok(HttpResponse::Ok().json(ApiResponse::success(created)))
}

/// Partially update a user.
///
/// Empty text fields leave the stored value unchanged, except `department`.
#[utoipa::path(
    put,
    path = "/users",
    tag = "Users",
    request_body = User,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<User>),
        (status = 400, description = "Body could not be parsed or user_id missing", body = ApiResponse<i32>),
        (status = 409, description = "Username or email already taken", body = ApiResponse<i32>),
        (status = 500, description = "Update failed", body = ApiResponse<i32>),
    )
)]
pub async fn update_user(
    repo: web::Data<dyn UserRepository>,
    body: Result<web::Json<User>, actix_web::Error>,
) -> AppResult<HttpResponse> {
    let user = bind_user(body, true)?;

    if user.user_id == 0 {
        let code = ErrorCode::UsersRepoUpdateInvalidUserId;
        warn!(code = code.as_i32(), "{}", code.message());
        return Err(AppError::invalid_input(code));
    }

    let updated = repo.update_user(user).await?;

    info!(user_id = updated.user_id, "Updated user");
    Ok(HttpResponse::Ok().json(ApiResponse::success(updated)))
}

/// Delete a user by id.
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = "Users",
    params(
        ("user_id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User deleted, id echoed back", body = ApiResponse<i32>),
        (status = 400, description = "user_id is not an integer", body = ApiResponse<i32>),
        (status = 404, description = "No user with that id"),
        (status = 500, description = "Delete failed", body = ApiResponse<i32>),
    )
)]
pub async fn delete_user(
    repo: web::Data<dyn UserRepository>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let raw = path.into_inner();
    let user_id: i32 = raw.parse().map_err(|e| {
        let code = ErrorCode::UsersControllerInvalidUserIdParam;
        warn!(code = code.as_i32(), param = %raw, error = %e, "{}", code.message());
        AppError::invalid_input(code)
    })?;

    if !repo.delete_user(user_id).await? {
        return Ok(HttpResponse::NotFound().json(ApiResponse::<i32>::empty()));
    }

    info!(user_id, "Deleted user");
    Ok(HttpResponse::Ok().json(ApiResponse::success(user_id)))
}

/// Configure user routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users")
            .route(web::get().to(list_users))
            .route(web::post().to(create_user))
            .route(web::put().to(update_user)),
    )
    .service(web::resource("/users/{user_id}").route(web::delete().to(delete_user)));
}
