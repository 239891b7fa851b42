use crate::core::error::{ApiError, OrderError};
use crate::core::state::AppState;
use crate::models::api::{OrderIdQuery, SuccessResponse};
use crate::models::order::LayoutImage;
use axum::{
    body::{Body, Bytes},
    extract::{Query, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::info;

/// Attach layout artwork to an order.
///
/// POST /orders/layout?token=<token>&id=<id>, raw image bytes as the body.
///
/// The file picker reads the image asynchronously on the client; by the
/// time the bytes arrive here they trigger exactly one mutation followed
/// by a persist.
pub async fn upload_layout_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<OrderIdQuery>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    state.sessions.require(&params.token)?;

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();

    let layout = LayoutImage {
        content_type,
        data: body.to_vec(),
    };
    let size = layout.data.len();

    if state.orders.set_layout(params.id, layout) {
        info!(order_id = params.id, bytes = size, "Layout uploaded");
    }

    Ok((
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: "Layout uploaded".to_string(),
        }),
    )
        .into_response())
}

/// Fetch the stored layout artwork.
///
/// GET /orders/layout?token=<token>&id=<id>
///
/// 404 when the order has no layout (or no longer exists). This is a
/// read, so unlike the mutations it does tell the caller.
pub async fn get_layout_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<OrderIdQuery>,
) -> Result<Response, ApiError> {
    state.sessions.require(&params.token)?;

    let layout = state
        .orders
        .get(params.id)
        .and_then(|order| order.layout)
        .ok_or(OrderError::LayoutNotFound)?;

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, layout.content_type)
        .body(Body::from(layout.data))
        .unwrap())
}
