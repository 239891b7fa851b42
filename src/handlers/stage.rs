use crate::core::error::{ApiError, AuthError, OrderError};
use crate::core::state::AppState;
use crate::models::api::{StageQuery, SuccessResponse};
use crate::models::stage::Stage;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Toggle one stage flag on an order. The only role-gated mutation on the
/// board: a worker may advance exactly the stage matching their role.
///
/// POST /orders/stage?token=<token>&id=<id>&stage=<stage>&done=<0|1>
///
/// The permission check lives here, not in the store: the store trusts
/// its caller.
pub async fn update_stage_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StageQuery>,
) -> Result<Response, ApiError> {
    state.sessions.require(&params.token)?;

    let stage = Stage::from_name(&params.stage)
        .ok_or_else(|| OrderError::UnknownStage(params.stage.clone()))?;

    if !state.sessions.has_permission(&params.token, stage) {
        warn!(stage = %stage, "Stage update without matching role");
        return Err(AuthError::StageNotPermitted.into());
    }

    let done = params.done != 0;
    if state.orders.update_stage(params.id, stage, done) {
        info!(order_id = params.id, stage = %stage, done, "Stage updated");
    }

    let status = if done { "complete" } else { "pending" };
    Ok((
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: format!("Stage {} marked {}", stage.display_name(), status),
        }),
    )
        .into_response())
}
