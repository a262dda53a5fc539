use axum::http::{HeaderValue, StatusCode, header};
use sea_orm::{DbErr, MockDatabase};
use serde_json::{Value, json};

use rolodex_users_schema::users;

use crate::helpers::{TEST_SERVER_ID, john_row, mock_db, test_server};

fn with_rows(db: MockDatabase, rows: Vec<users::Model>) -> MockDatabase {
    db.append_query_results([rows])
}

// ── GET /users/{id} ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_every_column_and_server_id() {
    let server = test_server(with_rows(mock_db(), vec![john_row(1)]).into_connection());

    let response = server.get("/users/1").await;

    response.assert_status(StatusCode::OK);
    response.assert_json(&json!({
        "id": 1,
        "first_name": "John",
        "last_name": "Doe",
        "address_street": "21 2nd Street",
        "address_city": "New York",
        "address_state": "NY",
        "address_zip": "10021",
        "phone_number": ["212 555-1234", "646 555-4567"],
        "server_id": TEST_SERVER_ID,
    }));
}

#[tokio::test]
async fn should_serialize_absent_columns_as_null() {
    let row = users::Model {
        address_street: None,
        address_city: None,
        address_state: None,
        address_zip: None,
        phone_number: None,
        ..john_row(2)
    };
    let server = test_server(with_rows(mock_db(), vec![row]).into_connection());

    let body: Value = server.get("/users/2").await.json();

    assert_eq!(body["first_name"], "John");
    assert!(body["address_street"].is_null());
    assert!(body["phone_number"].is_null());
    assert_eq!(body["server_id"], TEST_SERVER_ID);
}

#[tokio::test]
async fn should_return_404_for_unknown_id() {
    let server = test_server(with_rows(mock_db(), vec![]).into_connection());

    let response = server.get("/users/999999").await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "error": "User not found" }));
}

#[tokio::test]
async fn should_return_500_for_non_numeric_id_and_keep_serving() {
    let db = mock_db()
        .append_query_errors([DbErr::Custom(
            r#"invalid input syntax for type integer: "abc""#.into(),
        )])
        .append_query_results([vec![john_row(1)]])
        .into_connection();
    let server = test_server(db);

    let response = server.get("/users/abc").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "error": "Internal Server Error" }));

    server.get("/users/1").await.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn should_not_leak_backend_detail() {
    let db = mock_db()
        .append_query_errors([DbErr::Conn(sea_orm::RuntimeErr::Internal(
            "password authentication failed for user \"rolodex\"".into(),
        ))])
        .into_connection();
    let server = test_server(db);

    let response = server.get("/users/1").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!response.text().contains("password"));
}

#[tokio::test]
async fn should_return_identical_bytes_for_repeated_reads() {
    let db = mock_db()
        .append_query_results([vec![john_row(1)], vec![john_row(1)]])
        .into_connection();
    let server = test_server(db);

    let first = server.get("/users/1").await.text();
    let second = server.get("/users/1").await.text();

    assert_eq!(first, second);
}

// ── Middleware ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_allow_any_origin() {
    let server = test_server(with_rows(mock_db(), vec![john_row(1)]).into_connection());

    let response = server
        .get("/users/1")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static("https://frontend.example"),
        )
        .await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
}

#[tokio::test]
async fn should_tag_error_responses_with_request_id() {
    let server = test_server(with_rows(mock_db(), vec![]).into_connection());

    let response = server.get("/users/42").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(!response.header("x-request-id").is_empty());
}

#[tokio::test]
async fn should_not_route_other_paths() {
    let server = test_server(mock_db().into_connection());

    server.get("/users").await.assert_status(StatusCode::NOT_FOUND);
    server
        .post("/users/1")
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
