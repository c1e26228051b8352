/// Router assembly
use crate::{api, middleware, state::AppState};
use axum::{middleware as axum_middleware, routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

pub fn create_router(app_state: AppState) -> Router {
    // Public routes
    let public_routes = Router::new()
        .route("/", get(api::home::index))
        .route("/health", get(api::health::health))
        .route(
            "/register",
            get(api::users::register_form).post(api::users::register),
        )
        .route(
            "/add",
            get(api::reports::report_form).post(api::reports::submit_report),
        )
        .route("/set_language/:lang", get(api::language::set_language));

    // Admin routes (guarded only when admin.require_auth is set)
    let admin_routes = Router::new()
        .route("/admin", get(api::admin::list_reports))
        .route("/admin/approve/:id", get(api::admin::approve))
        .route("/admin/reject/:id", get(api::admin::reject))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            middleware::admin_guard,
        ));

    public_routes
        .merge(admin_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
