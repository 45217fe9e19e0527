//! Integration tests for the legacy settings import endpoint.
//!
//! The import accepts a dump of legacy storage keys and writes only fields
//! with no existing database row. Existing rows always win, and re-running
//! the import is a no-op.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    cleanup_all_test_data, create_test_app, create_test_journal, create_test_pool, get_request,
    json_request, parse_response_body, run_migrations, test_config, TestJournal,
};
use serde_json::json;
use tower::ServiceExt;

fn import_uri(journal_id: i64) -> String {
    format!("/api/v1/journals/{}/legacy-import", journal_id)
}

#[tokio::test]
async fn test_import_legacy_settings() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    cleanup_all_test_data(&pool).await;

    let config = test_config();
    let app = create_test_app(config, pool.clone());
    let journal = create_test_journal(&app, &TestJournal::new()).await;

    let request = json_request(
        Method::POST,
        &import_uri(journal.id),
        json!({
            "entries": {
                "settings_context_contact": {
                    "contact_name": "Legacy Contact",
                    "contact_email": "legacy@example.com"
                },
                "settings_workflow_review": {
                    "review_deadline_weeks": 6
                }
            }
        }),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    let imported = body["imported"].as_array().unwrap();
    assert_eq!(imported.len(), 2);
    assert!(body["skipped"].as_array().unwrap().is_empty());

    let response = app
        .oneshot(get_request(&format!(
            "/api/v1/journals/{}/settings/contact",
            journal.id
        )))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(
        body["values"]["contact_name"].as_str().unwrap(),
        "Legacy Contact"
    );
    assert_eq!(
        body["values"]["contact_email"].as_str().unwrap(),
        "legacy@example.com"
    );

    cleanup_all_test_data(&pool).await;
}

#[tokio::test]
async fn test_import_never_overwrites_existing_settings() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    cleanup_all_test_data(&pool).await;

    let config = test_config();
    let app = create_test_app(config, pool.clone());
    let journal = create_test_journal(&app, &TestJournal::new()).await;

    // A value saved through the settings form before the import runs
    let request = json_request(
        Method::PUT,
        &format!("/api/v1/journals/{}/settings/contact", journal.id),
        json!({
            "contact_name": "Current Contact",
            "contact_email": "current@example.com"
        }),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = json_request(
        Method::POST,
        &import_uri(journal.id),
        json!({
            "entries": {
                "settings_context_contact": {
                    "contact_name": "Stale Legacy Contact",
                    "contact_phone": "+1 555 0100"
                }
            }
        }),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(get_request(&format!(
            "/api/v1/journals/{}/settings/contact",
            journal.id
        )))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    // The existing row wins; only the missing field is imported
    assert_eq!(
        body["values"]["contact_name"].as_str().unwrap(),
        "Current Contact"
    );
    assert_eq!(
        body["values"]["contact_phone"].as_str().unwrap(),
        "+1 555 0100"
    );

    cleanup_all_test_data(&pool).await;
}

#[tokio::test]
async fn test_import_is_idempotent() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    cleanup_all_test_data(&pool).await;

    let config = test_config();
    let app = create_test_app(config, pool.clone());
    let journal = create_test_journal(&app, &TestJournal::new()).await;

    let entries = json!({
        "entries": {
            "settings_context_contact": {
                "contact_name": "Legacy Contact"
            }
        }
    });

    let request = json_request(Method::POST, &import_uri(journal.id), entries.clone());
    let response = app.clone().oneshot(request).await.unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["imported"].as_array().unwrap().len(), 1);

    // Second run finds every field already present and skips the key
    let request = json_request(Method::POST, &import_uri(journal.id), entries);
    let response = app.clone().oneshot(request).await.unwrap();
    let body = parse_response_body(response).await;
    assert!(body["imported"].as_array().unwrap().is_empty());

    let skipped = body["skipped"].as_array().unwrap();
    assert_eq!(skipped.len(), 1);
    assert_eq!(
        skipped[0]["reason"].as_str().unwrap(),
        "already_present"
    );

    cleanup_all_test_data(&pool).await;
}

#[tokio::test]
async fn test_import_reports_unrecognized_keys() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    cleanup_all_test_data(&pool).await;

    let config = test_config();
    let app = create_test_app(config, pool.clone());
    let journal = create_test_journal(&app, &TestJournal::new()).await;

    let request = json_request(
        Method::POST,
        &import_uri(journal.id),
        json!({
            "entries": {
                "settings_unknown_area": { "some_field": "value" },
                "settings_context_contact": { "contact_name": "Legacy Contact" }
            }
        }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["imported"].as_array().unwrap().len(), 1);

    let skipped = body["skipped"].as_array().unwrap();
    assert_eq!(skipped.len(), 1);
    assert_eq!(
        skipped[0]["key"].as_str().unwrap(),
        "settings_unknown_area"
    );
    assert_eq!(skipped[0]["reason"].as_str().unwrap(), "unrecognized_key");

    cleanup_all_test_data(&pool).await;
}

#[tokio::test]
async fn test_import_accepts_json_string_payloads() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    cleanup_all_test_data(&pool).await;

    let config = test_config();
    let app = create_test_app(config, pool.clone());
    let journal = create_test_journal(&app, &TestJournal::new()).await;

    // Legacy storage held values as JSON-encoded strings
    let request = json_request(
        Method::POST,
        &import_uri(journal.id),
        json!({
            "entries": {
                "settings_workflow_review": "{\"review_deadline_weeks\": 8}"
            }
        }),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(get_request(&format!(
            "/api/v1/journals/{}/settings/workflow",
            journal.id
        )))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["values"]["review_deadline_weeks"].as_i64().unwrap(), 8);

    cleanup_all_test_data(&pool).await;
}

#[tokio::test]
async fn test_import_journal_not_found() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    cleanup_all_test_data(&pool).await;

    let config = test_config();
    let app = create_test_app(config, pool.clone());

    let request = json_request(
        Method::POST,
        "/api/v1/journals/999999/legacy-import",
        json!({ "entries": {} }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    cleanup_all_test_data(&pool).await;
}
