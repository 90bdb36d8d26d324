//! Routes of the user service.

use crate::clients::{ActorClient, UserClient};
use crate::http::error::required;
use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::user_actor::UserError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

/// Body of `POST /register`. Both fields are required; they are optional here so a missing
/// field is reported as a validation error rather than a deserialisation failure.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Builds the user service router around `client`.
pub fn router(client: UserClient) -> Router {
    Router::new()
        .route("/users", get(list_users))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/register", post(register_user))
        .layer(TraceLayer::new_for_http())
        .with_state(client)
}

async fn list_users(State(client): State<UserClient>) -> Result<Json<Vec<User>>, UserError> {
    Ok(Json(client.list().await?))
}

async fn get_user(
    State(client): State<UserClient>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<User>, UserError> {
    let Path(id) = path?;
    let id = UserId(id);
    client
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| UserError::NotFound(id.to_string()))
}

async fn register_user(
    State(client): State<UserClient>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), UserError> {
    let Json(req) = payload?;
    let params = UserCreate {
        name: required(req.name, "name").map_err(UserError::ValidationError)?,
        email: required(req.email, "email").map_err(UserError::ValidationError)?,
    };
    let user = client.register_user(params).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User registered", "user": user })),
    ))
}

async fn update_user(
    State(client): State<UserClient>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Option<Json<UserUpdate>>, JsonRejection>,
) -> Result<Json<Value>, UserError> {
    let Path(id) = path?;
    // No body at all is an empty update.
    let update = payload?.map(|Json(update)| update).unwrap_or_default();
    let user = client.update_user(UserId(id), update).await?;
    Ok(Json(json!({ "message": "User updated", "user": user })))
}

async fn delete_user(
    State(client): State<UserClient>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, UserError> {
    let Path(id) = path?;
    client.delete(UserId(id)).await?;
    Ok(Json(json!({ "message": "User deleted" })))
}
