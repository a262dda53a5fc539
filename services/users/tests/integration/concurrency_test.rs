use std::collections::BTreeSet;
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use futures::future::join_all;
use sea_orm::{DatabaseBackend, Transaction, Value};

use rolodex_users::error::UsersServiceError;
use rolodex_users::infra::db::FIND_USER_BY_ID;
use rolodex_users::usecase::user::GetUserUseCase;

use crate::helpers::{
    MockUserRepo, TEST_SERVER_ID, john_row, mock_db, numbered_user, shared_test_server,
};

fn usecase(repo: MockUserRepo) -> GetUserUseCase<MockUserRepo> {
    GetUserUseCase {
        repo,
        query_timeout: Duration::from_secs(5),
    }
}

// ── Use case ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_answer_interleaved_lookups_independently() {
    let usecase = usecase(MockUserRepo::new((1..=50).map(numbered_user).collect()));
    let ids: Vec<String> = (1..=50).rev().map(|id: i32| id.to_string()).collect();

    let results = join_all(ids.iter().map(|id| usecase.execute(id))).await;

    for (id, result) in ids.iter().zip(results) {
        let user = result.unwrap();
        assert_eq!(&user.id.to_string(), id);
        assert_eq!(user, numbered_user(user.id));
    }
}

#[tokio::test]
async fn should_isolate_failures_between_concurrent_lookups() {
    let usecase = usecase(MockUserRepo::new(vec![numbered_user(1)]));

    let (found, missing, malformed) = tokio::join!(
        usecase.execute("1"),
        usecase.execute("2"),
        usecase.execute("abc"),
    );

    assert_eq!(found.unwrap(), numbered_user(1));
    assert!(matches!(missing, Err(UsersServiceError::UserNotFound)));
    assert!(matches!(malformed, Err(UsersServiceError::Internal(_))));
}

// ── Router over one shared connection ────────────────────────────────────────

#[tokio::test]
async fn should_serve_concurrent_requests_over_shared_connection() {
    const REQUESTS: i32 = 20;

    // The mock answers in queue order, not by parameter, so each row must
    // reach exactly one response and each id must be bound exactly once.
    let db = Arc::new(
        mock_db()
            .append_query_results((1..=REQUESTS).map(|id| vec![john_row(id)]))
            .into_connection(),
    );
    let server = shared_test_server(Arc::clone(&db));

    let responses = join_all(
        (1..=REQUESTS).map(|id| server.get(&format!("/users/{id}")).into_future()),
    )
    .await;

    let mut served = BTreeSet::new();
    for response in responses {
        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["server_id"], TEST_SERVER_ID);
        assert_eq!(body["last_name"], "Doe");
        assert!(served.insert(body["id"].as_i64().unwrap()), "{body}");
    }
    assert_eq!(served, (1..=i64::from(REQUESTS)).collect::<BTreeSet<_>>());

    drop(server);
    let log = Arc::into_inner(db)
        .expect("router still holds the connection")
        .into_transaction_log();
    assert_eq!(log.len(), REQUESTS as usize);
    for id in 1..=REQUESTS {
        let lookup = Transaction::from_sql_and_values(
            DatabaseBackend::Postgres,
            FIND_USER_BY_ID,
            [Value::from(id.to_string())],
        );
        assert_eq!(log.iter().filter(|t| **t == lookup).count(), 1, "id {id}");
    }
}
