//! Integration tests for enrollment endpoints.
//!
//! User accounts are provisioned outside this service, so tests seed the
//! account rows directly and exercise the enrollment API on top.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    cleanup_all_test_data, create_test_app, create_test_journal, create_test_pool, get_request,
    json_request, parse_response_body, run_migrations, seed_user_account, test_config,
    unique_test_email, TestJournal,
};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_create_enrollment_success() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    cleanup_all_test_data(&pool).await;

    let config = test_config();
    let app = create_test_app(config, pool.clone());
    let journal = create_test_journal(&app, &TestJournal::new()).await;

    let email = unique_test_email();
    let user_id = seed_user_account(&pool, &email, "Grace Hopper").await;

    let request = json_request(
        Method::POST,
        &format!("/api/v1/journals/{}/enrollments", journal.id),
        json!({ "email": email, "role": "editor" }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_response_body(response).await;
    assert_eq!(body["user_id"].as_i64().unwrap(), user_id);
    assert_eq!(body["email"].as_str().unwrap(), email);
    assert_eq!(body["full_name"].as_str().unwrap(), "Grace Hopper");
    assert_eq!(body["role"].as_str().unwrap(), "editor");

    cleanup_all_test_data(&pool).await;
}

#[tokio::test]
async fn test_create_enrollment_unknown_email() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    cleanup_all_test_data(&pool).await;

    let config = test_config();
    let app = create_test_app(config, pool.clone());
    let journal = create_test_journal(&app, &TestJournal::new()).await;

    let request = json_request(
        Method::POST,
        &format!("/api/v1/journals/{}/enrollments", journal.id),
        json!({ "email": unique_test_email(), "role": "editor" }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = parse_response_body(response).await;
    assert_eq!(
        body["message"].as_str().unwrap(),
        "No user account with that email"
    );

    cleanup_all_test_data(&pool).await;
}

#[tokio::test]
async fn test_create_enrollment_invalid_email() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    cleanup_all_test_data(&pool).await;

    let config = test_config();
    let app = create_test_app(config, pool.clone());
    let journal = create_test_journal(&app, &TestJournal::new()).await;

    let request = json_request(
        Method::POST,
        &format!("/api/v1/journals/{}/enrollments", journal.id),
        json!({ "email": "not-an-email", "role": "editor" }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    cleanup_all_test_data(&pool).await;
}

#[tokio::test]
async fn test_create_enrollment_unknown_role_rejected() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    cleanup_all_test_data(&pool).await;

    let config = test_config();
    let app = create_test_app(config, pool.clone());
    let journal = create_test_journal(&app, &TestJournal::new()).await;

    let email = unique_test_email();
    seed_user_account(&pool, &email, "Grace Hopper").await;

    // Role outside the known set fails deserialization
    let request = json_request(
        Method::POST,
        &format!("/api/v1/journals/{}/enrollments", journal.id),
        json!({ "email": email, "role": "superuser" }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    cleanup_all_test_data(&pool).await;
}

#[tokio::test]
async fn test_create_enrollment_is_idempotent() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    cleanup_all_test_data(&pool).await;

    let config = test_config();
    let app = create_test_app(config, pool.clone());
    let journal = create_test_journal(&app, &TestJournal::new()).await;

    let email = unique_test_email();
    seed_user_account(&pool, &email, "Grace Hopper").await;

    for _ in 0..2 {
        let request = json_request(
            Method::POST,
            &format!("/api/v1/journals/{}/enrollments", journal.id),
            json!({ "email": email, "role": "reviewer" }),
        );
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(get_request(&format!(
            "/api/v1/journals/{}/enrollments",
            journal.id
        )))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    cleanup_all_test_data(&pool).await;
}

#[tokio::test]
async fn test_list_enrollments() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    cleanup_all_test_data(&pool).await;

    let config = test_config();
    let app = create_test_app(config, pool.clone());
    let journal = create_test_journal(&app, &TestJournal::new()).await;

    let manager_email = unique_test_email();
    let reviewer_email = unique_test_email();
    seed_user_account(&pool, &manager_email, "Manager One").await;
    seed_user_account(&pool, &reviewer_email, "Reviewer Two").await;

    for (email, role) in [(&manager_email, "manager"), (&reviewer_email, "reviewer")] {
        let request = json_request(
            Method::POST,
            &format!("/api/v1/journals/{}/enrollments", journal.id),
            json!({ "email": email, "role": role }),
        );
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(get_request(&format!(
            "/api/v1/journals/{}/enrollments",
            journal.id
        )))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    let enrollments = body.as_array().unwrap();
    assert_eq!(enrollments.len(), 2);

    let roles: Vec<&str> = enrollments
        .iter()
        .map(|e| e["role"].as_str().unwrap())
        .collect();
    assert!(roles.contains(&"manager"));
    assert!(roles.contains(&"reviewer"));

    cleanup_all_test_data(&pool).await;
}

#[tokio::test]
async fn test_list_enrollments_journal_not_found() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    cleanup_all_test_data(&pool).await;

    let config = test_config();
    let app = create_test_app(config, pool.clone());

    let response = app
        .oneshot(get_request("/api/v1/journals/999999/enrollments"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    cleanup_all_test_data(&pool).await;
}
