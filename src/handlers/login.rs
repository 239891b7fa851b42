use crate::core::error::AuthError;
use crate::core::state::AppState;
use crate::models::api::{LoginRequest, LoginResponse, SessionResponse, SuccessResponse, TokenQuery, UserInfo};
use axum::{
    extract::{Query, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::warn;

/// Authenticate against the roster and open the board seat.
///
/// POST /login with a JSON body or an urlencoded login form:
/// `{name, password, role}`
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: String,
) -> Result<Response, AuthError> {
    let form = parse_login_body(&headers, &body)?;

    let session = state
        .sessions
        .login(&form.name, &form.password, &form.role)?;

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            success: true,
            token: session.token.clone(),
            user: UserInfo::from_user(&session.user),
        }),
    )
        .into_response())
}

/// Close the seat. Always succeeds, even when nobody was logged in.
///
/// POST /logout
pub async fn logout_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.sessions.logout();

    (
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: "Logged out".to_string(),
        }),
    )
}

/// The active session, for the board to re-check on page load.
///
/// GET /session?token=<token>
pub async fn session_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TokenQuery>,
) -> Result<Response, AuthError> {
    let session = state.sessions.require(&params.token)?;

    Ok((
        StatusCode::OK,
        Json(SessionResponse {
            success: true,
            user: UserInfo::from_user(&session.user),
        }),
    )
        .into_response())
}

/// The login form posts urlencoded; API clients post JSON. Decode by
/// Content-Type, defaulting to the form encoding.
fn parse_login_body(headers: &HeaderMap, body: &str) -> Result<LoginRequest, AuthError> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let parsed = if content_type.starts_with("application/json") {
        serde_json::from_str(body).map_err(|e| {
            warn!(error = %e, "Malformed JSON login body");
            AuthError::MalformedRequest
        })
    } else {
        serde_urlencoded::from_str(body).map_err(|e| {
            warn!(error = %e, "Malformed urlencoded login body");
            AuthError::MalformedRequest
        })
    };

    parsed
}
