use axum::{
    middleware,
    routing::{delete, get, patch, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware};
use crate::routes::{categories, enrollments, health, journals, legacy, sections, settings};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        pool,
        config: config.clone(),
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let api_routes = Router::new()
        // Journal routes (v1)
        .route(
            "/api/v1/journals",
            post(journals::create_journal).get(journals::list_journals),
        )
        .route(
            "/api/v1/journals/:journal_id",
            get(journals::get_journal).patch(journals::update_journal),
        )
        // Settings area routes (v1)
        .route(
            "/api/v1/journals/:journal_id/settings/:area",
            get(settings::get_area_settings).put(settings::update_area_settings),
        )
        // Section routes (v1)
        .route(
            "/api/v1/journals/:journal_id/sections",
            get(sections::list_sections).post(sections::create_section),
        )
        .route(
            "/api/v1/sections/:section_id/enabled",
            patch(sections::set_section_enabled),
        )
        .route(
            "/api/v1/sections/:section_id",
            delete(sections::delete_section),
        )
        // Category routes (v1)
        .route(
            "/api/v1/journals/:journal_id/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/api/v1/categories/:category_id",
            delete(categories::delete_category),
        )
        // Enrollment routes (v1)
        .route(
            "/api/v1/journals/:journal_id/enrollments",
            post(enrollments::create_enrollment).get(enrollments::list_enrollments),
        )
        // Legacy settings import (v1)
        .route(
            "/api/v1/journals/:journal_id/legacy-import",
            post(legacy::import_legacy_settings),
        );

    Router::new()
        .route("/health", get(health::health_check))
        .route("/metrics", get(metrics_handler))
        .merge(api_routes)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        // Handler futures are dropped when the client goes away or the
        // timeout fires; no in-flight write outlives its request scope
        // beyond the statement already submitted.
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
