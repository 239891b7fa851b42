// Board statistics endpoint

use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::api::TokenQuery;
use crate::stats::board;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

/// Returns the six board counters, recomputed from the full order list on
/// every call: total, in production, with layout, waiting for cut,
/// completed, delayed.
///
/// GET /stats?token=<token>
pub async fn stats_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TokenQuery>,
) -> Result<Response, ApiError> {
    state.sessions.require(&params.token)?;

    let orders = state.orders.list();
    let today = chrono::Local::now().date_naive();
    let stats = board::compute(&orders, today);

    Ok((StatusCode::OK, Json(stats)).into_response())
}
