//! Create and list scenarios.

use actix_web::test;
use serde_json::json;

use super::memory_repo::MemoryUserRepository;
use super::test_helpers::*;

/// Created user comes back with an id and every supplied field.
#[actix_rt::test]
async fn test_create_returns_stored_user() {
    let app = create_test_app(MemoryUserRepository::new()).await;

    let (status, body) = create_user(&app, test_user_body()).await;

    assert_eq!(status, 200, "Create should succeed: {:?}", body);
    let mut expected = test_user_body();
    expected["user_id"] = json!(1);
    assert_eq!(body, json!({ "data": expected }));
}

/// A user read back from the list equals the one returned by create.
#[actix_rt::test]
async fn test_create_then_list_round_trip() {
    let app = create_test_app(MemoryUserRepository::new()).await;

    let (_, created) = create_user(&app, test_user_body()).await;
    let (status, listed) = list_users(&app).await;

    assert_eq!(status, 200);
    assert_eq!(listed["data"], json!([created["data"].clone()]));
}

#[actix_rt::test]
async fn test_list_empty_store() {
    let app = create_test_app(MemoryUserRepository::new()).await;

    let (status, body) = list_users(&app).await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "data": [] }));
}

#[actix_rt::test]
async fn test_list_failure_reports_list_code() {
    let app = create_test_app(MemoryUserRepository::failing()).await;

    let (status, body) = list_users(&app).await;

    assert_eq!(status, 500);
    assert_eq!(
        body,
        json!({
            "error_code": 10001,
            "error_message": "failed to get users from records"
        })
    );
}

/// Second user with the same username is a conflict.
#[actix_rt::test]
async fn test_duplicate_username_is_conflict() {
    let app = create_test_app(MemoryUserRepository::new()).await;
    create_user(&app, test_user_body()).await;

    let mut body = test_user_body();
    body["email"] = json!("other@user.com");
    let (status, resp) = create_user(&app, body).await;

    assert_eq!(status, 409);
    assert_eq!(resp["error_code"], 10003);
    assert_eq!(resp["error_message"], "user with username already exists");
}

#[actix_rt::test]
async fn test_duplicate_email_is_conflict() {
    let app = create_test_app(MemoryUserRepository::new()).await;
    create_user(&app, test_user_body()).await;

    let mut body = test_user_body();
    body["user_name"] = json!("otherUser");
    let (status, resp) = create_user(&app, body).await;

    assert_eq!(status, 409);
    assert_eq!(resp["error_code"], 10004);
}

/// Unknown status labels are a server error, not a conflict.
#[actix_rt::test]
async fn test_invalid_status_is_server_error() {
    let app = create_test_app(MemoryUserRepository::new()).await;

    let mut body = test_user_body();
    body["user_status"] = json!("e");
    let (status, resp) = create_user(&app, body).await;

    assert_eq!(status, 500);
    assert_eq!(resp["error_code"], 10005);
    assert_eq!(resp["error_message"], "input for user_status is invalid");
}

#[actix_rt::test]
async fn test_unparseable_create_body_is_bad_request() {
    let app = create_test_app(MemoryUserRepository::new()).await;

    let req = test::TestRequest::post()
        .uri("/users")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"user_name\": 5")
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, 400);
    assert_eq!(
        body,
        json!({
            "error_code": 10009,
            "error_message": "user input body is invalid"
        })
    );
}

#[actix_rt::test]
async fn test_create_against_unreachable_store() {
    let app = create_test_app(MemoryUserRepository::failing()).await;

    let (status, body) = create_user(&app, test_user_body()).await;

    assert_eq!(status, 500);
    assert_eq!(body["error_code"], 10002);
    assert!(body.get("data").is_none());
}
