//! Partial update scenarios.

use actix_web::test;
use serde_json::json;

use super::memory_repo::MemoryUserRepository;
use super::test_helpers::*;

/// Only supplied fields change; the rest keep their stored values.
#[actix_rt::test]
async fn test_partial_update_changes_supplied_fields() {
    let app = create_test_app(MemoryUserRepository::new()).await;
    create_user(&app, test_user_body()).await;

    let (status, body) = update_user(
        &app,
        json!({
            "user_id": 1,
            "user_name": "testUserChange",
            "department": "warehouse"
        }),
    )
    .await;

    assert_eq!(status, 200, "Update should succeed: {:?}", body);
    assert_eq!(
        body["data"],
        json!({
            "user_id": 1,
            "user_name": "testUserChange",
            "first_name": "test",
            "last_name": "user",
            "email": "test@user.com",
            "user_status": "A",
            "department": "warehouse"
        })
    );

    let (_, listed) = list_users(&app).await;
    assert_eq!(listed["data"][0], body["data"]);
}

/// Department is written even when the body leaves it out.
#[actix_rt::test]
async fn test_update_without_department_clears_it() {
    let app = create_test_app(MemoryUserRepository::new()).await;
    create_user(&app, test_user_body()).await;

    let (status, body) =
        update_user(&app, json!({ "user_id": 1, "email": "new@user.com" })).await;

    assert_eq!(status, 200);
    assert_eq!(body["data"]["email"], "new@user.com");
    assert_eq!(body["data"]["user_name"], "testUser");
    assert_eq!(body["data"]["department"], "");
}

#[actix_rt::test]
async fn test_update_without_user_id_is_bad_request() {
    let app = create_test_app(MemoryUserRepository::new()).await;
    create_user(&app, test_user_body()).await;

    let (status, body) = update_user(&app, json!({ "user_name": "nobody" })).await;

    assert_eq!(status, 400);
    assert_eq!(
        body,
        json!({
            "error_code": 10007,
            "error_message": "user Id is required to update the user"
        })
    );
}

/// The parser's message follows the code message.
#[actix_rt::test]
async fn test_unparseable_update_body_includes_detail() {
    let app = create_test_app(MemoryUserRepository::new()).await;

    let req = test::TestRequest::put()
        .uri("/users")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"user_id\": \"one\"}")
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, 400);
    assert_eq!(body["error_code"], 10009);
    let message = body["error_message"].as_str().unwrap();
    assert!(message.starts_with("user input body is invalid. "), "{}", message);
    assert!(message.len() > "user input body is invalid. ".len());
}

#[actix_rt::test]
async fn test_update_to_taken_email_is_conflict() {
    let app = create_test_app(MemoryUserRepository::new()).await;
    create_user(&app, test_user_body()).await;
    let mut second = test_user_body();
    second["user_name"] = json!("secondUser");
    second["email"] = json!("second@user.com");
    create_user(&app, second).await;

    let (status, body) = update_user(
        &app,
        json!({ "user_id": 2, "email": "test@user.com", "department": "sales" }),
    )
    .await;

    assert_eq!(status, 409);
    assert_eq!(body["error_code"], 10004);
}

#[actix_rt::test]
async fn test_update_unknown_user_is_server_error() {
    let app = create_test_app(MemoryUserRepository::new()).await;

    let (status, body) =
        update_user(&app, json!({ "user_id": 99, "first_name": "ghost" })).await;

    assert_eq!(status, 500);
    assert_eq!(body["error_code"], 10006);
}
