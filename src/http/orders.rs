//! Routes of the order service.

use crate::clients::{ActorClient, OrderClient};
use crate::http::error::required;
use crate::model::{Order, OrderCreate, OrderId, OrderUpdate, UserId};
use crate::order_actor::OrderError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

/// Body of `POST /order`.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub user_id: Option<UserId>,
    pub product: Option<String>,
}

/// Builds the order service router around `client`.
pub fn router(client: OrderClient) -> Router {
    Router::new()
        .route("/orders", get(list_orders))
        .route(
            "/orders/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .route("/order", post(create_order))
        .layer(TraceLayer::new_for_http())
        .with_state(client)
}

async fn list_orders(State(client): State<OrderClient>) -> Result<Json<Vec<Order>>, OrderError> {
    Ok(Json(client.list().await?))
}

async fn get_order(
    State(client): State<OrderClient>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Order>, OrderError> {
    let Path(id) = path?;
    let id = OrderId(id);
    client
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| OrderError::NotFound(id.to_string()))
}

async fn create_order(
    State(client): State<OrderClient>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), OrderError> {
    let Json(req) = payload?;
    let params = OrderCreate {
        user_id: required(req.user_id, "user_id").map_err(OrderError::ValidationError)?,
        product: required(req.product, "product").map_err(OrderError::ValidationError)?,
    };
    let order = client.create_order(params).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Order created", "order": order })),
    ))
}

async fn update_order(
    State(client): State<OrderClient>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Option<Json<OrderUpdate>>, JsonRejection>,
) -> Result<Json<Value>, OrderError> {
    let Path(id) = path?;
    // No body at all is an empty update.
    let update = payload?.map(|Json(update)| update).unwrap_or_default();
    let order = client.update_order(OrderId(id), update).await?;
    Ok(Json(json!({ "message": "Order updated", "order": order })))
}

async fn delete_order(
    State(client): State<OrderClient>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, OrderError> {
    let Path(id) = path?;
    client.delete(OrderId(id)).await?;
    Ok(Json(json!({ "message": "Order deleted" })))
}
