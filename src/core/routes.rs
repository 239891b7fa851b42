// HTTP routes configuration
//
// This router is the explicit dispatch table between board actions and
// component calls; handlers consult the session manager before touching
// the order store.

use crate::core::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Session endpoints
        .route("/login", post(crate::handlers::login::login_handler))
        .route("/logout", post(crate::handlers::login::logout_handler))
        .route("/session", get(crate::handlers::login::session_handler))

        // Order endpoints (require an active session)
        .route(
            "/orders",
            get(crate::handlers::orders::list_orders_handler)
                .post(crate::handlers::orders::add_order_handler),
        )
        .route("/orders/update", post(crate::handlers::orders::update_order_handler))
        .route("/orders/remove", post(crate::handlers::orders::remove_order_handler))
        .route("/orders/stage", post(crate::handlers::stage::update_stage_handler))
        .route(
            "/orders/layout",
            get(crate::handlers::layout::get_layout_handler)
                .post(crate::handlers::layout::upload_layout_handler),
        )

        // Board statistics
        .route("/stats", get(crate::handlers::stats::stats_handler))

        // Liveness probe
        .route("/health", get(crate::handlers::health::health_handler))

        // 404 fallback for all unmatched routes
        .fallback(crate::handlers::fallback::fallback_handler)

        .with_state(state)
}
