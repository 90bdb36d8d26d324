//! Status codes and JSON bodies for domain errors.
//!
//! Every failure is rendered as `{"error": "<message>"}`.

use crate::order_actor::OrderError;
use crate::user_actor::UserError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

fn error_response(status: StatusCode, message: String) -> Response {
    if status.is_server_error() {
        error!(%status, %message, "Request failed");
    }
    let body = serde_json::json!({ "error": message });
    (status, Json(body)).into_response()
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            UserError::NotFound(_) => (StatusCode::NOT_FOUND, "User not found".to_string()),
            UserError::AlreadyExists(_) => {
                (StatusCode::CONFLICT, "Email already registered".to_string())
            }
            UserError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            e @ (UserError::DatabaseError(_) | UserError::ActorCommunicationError(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };
        error_response(status, message)
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            OrderError::NotFound(_) => (StatusCode::NOT_FOUND, "Order not found".to_string()),
            OrderError::UserNotFound(_) => (StatusCode::NOT_FOUND, "User not found".to_string()),
            OrderError::UserServiceUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "User service unavailable".to_string(),
            ),
            OrderError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            e @ (OrderError::DatabaseError(_) | OrderError::ActorCommunicationError(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };
        error_response(status, message)
    }
}

impl From<JsonRejection> for UserError {
    fn from(rejection: JsonRejection) -> Self {
        UserError::ValidationError(rejection.body_text())
    }
}

impl From<JsonRejection> for OrderError {
    fn from(rejection: JsonRejection) -> Self {
        OrderError::ValidationError(rejection.body_text())
    }
}

impl From<PathRejection> for UserError {
    fn from(rejection: PathRejection) -> Self {
        UserError::ValidationError(rejection.body_text())
    }
}

impl From<PathRejection> for OrderError {
    fn from(rejection: PathRejection) -> Self {
        OrderError::ValidationError(rejection.body_text())
    }
}

/// Unwraps a required request field.
pub(crate) fn required<T>(value: Option<T>, field: &str) -> Result<T, String> {
    value.ok_or_else(|| format!("{field} is required"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(response: Response) -> (StatusCode, serde_json::Value) {
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn unreachable_user_service_is_503() {
        let (status, body) =
            render(OrderError::UserServiceUnavailable("timed out".into()).into_response()).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "User service unavailable");
    }

    #[tokio::test]
    async fn unknown_user_on_order_is_404() {
        let (status, body) = render(OrderError::UserNotFound("user_9".into()).into_response()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "User not found");
    }

    #[tokio::test]
    async fn duplicate_email_is_409() {
        let (status, _) = render(UserError::AlreadyExists("email".into()).into_response()).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }
}
