//! Shared helpers for the user endpoint tests.

use std::sync::Arc;

use actix_web::{App, dev::ServiceResponse, test, web};
use serde_json::{Value, json};
use user_records_lib::api;
use user_records_lib::db::UserRepository;

use super::memory_repo::MemoryUserRepository;

/// Create the app over `repo`.
pub async fn create_test_app(
    repo: MemoryUserRepository,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = ServiceResponse,
    Error = actix_web::Error,
> {
    let repo: Arc<dyn UserRepository> = Arc::new(repo);

    test::init_service(
        App::new()
            .app_data(web::Data::from(repo))
            .configure(api::configure_user_routes),
    )
    .await
}

/// Send `req` and return the status with the parsed JSON body.
pub async fn send<S>(app: &S, req: actix_http::Request) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status().as_u16();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

/// Body for the reference test user.
pub fn test_user_body() -> Value {
    json!({
        "user_name": "testUser",
        "first_name": "test",
        "last_name": "user",
        "email": "test@user.com",
        "user_status": "A",
        "department": "sales"
    })
}

/// POST `body` to `/users`.
pub async fn create_user<S>(app: &S, body: Value) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(body)
        .to_request();
    send(app, req).await
}

/// PUT `body` to `/users`.
pub async fn update_user<S>(app: &S, body: Value) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let req = test::TestRequest::put()
        .uri("/users")
        .set_json(body)
        .to_request();
    send(app, req).await
}

/// GET `/users`.
pub async fn list_users<S>(app: &S) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let req = test::TestRequest::get().uri("/users").to_request();
    send(app, req).await
}

/// DELETE `/users/{id}`.
pub async fn delete_user<S>(app: &S, id: &str) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let req = test::TestRequest::delete()
        .uri(&format!("/users/{}", id))
        .to_request();
    send(app, req).await
}
