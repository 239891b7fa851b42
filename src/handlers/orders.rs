use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::api::{
    ListQuery, OrderIdQuery, OrderListResponse, OrderResponse, SuccessResponse, TokenQuery,
};
use crate::validation::order::OrderForm;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::info;

/// List the board, optionally filtered.
///
/// GET /orders?token=<token>&search=<term>
///
/// A blank or absent term yields the full list. The filter is a display
/// view; nothing is mutated.
pub async fn list_orders_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> Result<Response, ApiError> {
    state.sessions.require(&params.token)?;

    let orders = state.orders.search(params.search.as_deref().unwrap_or(""));

    Ok((
        StatusCode::OK,
        Json(OrderListResponse {
            success: true,
            orders,
        }),
    )
        .into_response())
}

/// Add an order to the board.
///
/// POST /orders?token=<token> with an order form body
pub async fn add_order_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TokenQuery>,
    Json(form): Json<OrderForm>,
) -> Result<Response, ApiError> {
    state.sessions.require(&params.token)?;

    let fields = form.validate()?;
    let order = state.orders.add(fields);

    info!(
        order_id = order.id,
        client = %order.client,
        order_number = %order.order_number,
        "Order added"
    );

    Ok((
        StatusCode::OK,
        Json(OrderResponse {
            success: true,
            order,
        }),
    )
        .into_response())
}

/// Edit the form fields of an existing order.
///
/// POST /orders/update?token=<token>&id=<id> with an order form body
///
/// A stale id mutates nothing and still answers success; the row that
/// triggered the edit no longer exists.
pub async fn update_order_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<OrderIdQuery>,
    Json(form): Json<OrderForm>,
) -> Result<Response, ApiError> {
    state.sessions.require(&params.token)?;

    let fields = form.validate()?;
    if state.orders.update(params.id, fields) {
        info!(order_id = params.id, "Order updated");
    }

    Ok((
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: "Order updated".to_string(),
        }),
    )
        .into_response())
}

/// Delete an order.
///
/// POST /orders/remove?token=<token>&id=<id>
pub async fn remove_order_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<OrderIdQuery>,
) -> Result<Response, ApiError> {
    state.sessions.require(&params.token)?;

    if state.orders.remove(params.id) {
        info!(order_id = params.id, "Order removed");
    }

    Ok((
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: "Order removed".to_string(),
        }),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::error::{AuthError, OrderError};
    use axum::body::Body;
    use http_body_util::BodyExt;
    use tempfile::TempDir;

    fn create_test_state() -> (Arc<AppState>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.storage.orders_path = temp_dir.path().join("orders.json");
        config.storage.session_path = temp_dir.path().join("session.json");

        (Arc::new(AppState::new(config)), temp_dir)
    }

    fn login(state: &Arc<AppState>) -> String {
        state
            .sessions
            .login("Maria Santos", "123456", "cutting")
            .unwrap()
            .token
    }

    fn order_form(client: &str, number: &str) -> OrderForm {
        OrderForm {
            client: client.to_string(),
            order_number: number.to_string(),
            date_in: "2026-08-01".to_string(),
            date_due: "2026-08-20".to_string(),
            note: None,
        }
    }

    async fn read_orders(response: Response) -> OrderListResponse {
        let (_, body) = response.into_parts();
        let bytes = Body::new(body).collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_add_and_list() {
        let (state, _guard) = create_test_state();
        let token = login(&state);

        let response = add_order_handler(
            State(state.clone()),
            Query(TokenQuery {
                token: token.clone(),
            }),
            Json(order_form("Confecções Aurora", "PED-1")),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = list_orders_handler(
            State(state),
            Query(ListQuery {
                token,
                search: None,
            }),
        )
        .await
        .unwrap();

        let listed = read_orders(response).await;
        assert_eq!(listed.orders.len(), 1);
        assert_eq!(listed.orders[0].client, "Confecções Aurora");
        assert!(!listed.orders[0].stages.any());
    }

    #[tokio::test]
    async fn test_list_requires_session() {
        let (state, _guard) = create_test_state();

        let result = list_orders_handler(
            State(state),
            Query(ListQuery {
                token: "nope".to_string(),
                search: None,
            }),
        )
        .await;

        assert!(matches!(
            result.unwrap_err(),
            ApiError::Auth(AuthError::NotLoggedIn)
        ));
    }

    #[tokio::test]
    async fn test_add_rejects_blank_client() {
        let (state, _guard) = create_test_state();
        let token = login(&state);

        let result = add_order_handler(
            State(state.clone()),
            Query(TokenQuery { token }),
            Json(order_form("  ", "PED-1")),
        )
        .await;

        assert!(matches!(
            result.unwrap_err(),
            ApiError::Order(OrderError::MissingField("client"))
        ));
        assert!(state.orders.is_empty());
    }

    #[tokio::test]
    async fn test_search_filters_list() {
        let (state, _guard) = create_test_state();
        let token = login(&state);

        add_order_handler(
            State(state.clone()),
            Query(TokenQuery {
                token: token.clone(),
            }),
            Json(order_form("Confecções Aurora", "PED-1")),
        )
        .await
        .unwrap();
        add_order_handler(
            State(state.clone()),
            Query(TokenQuery {
                token: token.clone(),
            }),
            Json(order_form("Malharia Horizonte", "PED-2")),
        )
        .await
        .unwrap();

        let response = list_orders_handler(
            State(state),
            Query(ListQuery {
                token,
                search: Some("horizonte".to_string()),
            }),
        )
        .await
        .unwrap();

        let listed = read_orders(response).await;
        assert_eq!(listed.orders.len(), 1);
        assert_eq!(listed.orders[0].order_number, "PED-2");
    }

    #[tokio::test]
    async fn test_update_edits_fields() {
        let (state, _guard) = create_test_state();
        let token = login(&state);

        let order = state
            .orders
            .add(order_form("Aurora", "PED-1").validate().unwrap());

        let response = update_order_handler(
            State(state.clone()),
            Query(OrderIdQuery {
                token,
                id: order.id,
            }),
            Json(order_form("Aurora Ltda", "PED-1B")),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let current = state.orders.get(order.id).unwrap();
        assert_eq!(current.client, "Aurora Ltda");
    }

    #[tokio::test]
    async fn test_stale_id_answers_success() {
        let (state, _guard) = create_test_state();
        let token = login(&state);

        let response = update_order_handler(
            State(state.clone()),
            Query(OrderIdQuery {
                token: token.clone(),
                id: 404,
            }),
            Json(order_form("Ghost", "PED-X")),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = remove_order_handler(
            State(state),
            Query(OrderIdQuery { token, id: 404 }),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_remove_deletes_order() {
        let (state, _guard) = create_test_state();
        let token = login(&state);

        let order = state
            .orders
            .add(order_form("Aurora", "PED-1").validate().unwrap());

        remove_order_handler(
            State(state.clone()),
            Query(OrderIdQuery {
                token,
                id: order.id,
            }),
        )
        .await
        .unwrap();

        assert!(state.orders.is_empty());
    }
}
