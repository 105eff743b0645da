use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::balance::BalanceError;
use crate::domain::repositories::RepositoryError;

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Creates a 502 Bad Gateway error
    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }

    /// Creates a 503 Service Unavailable error
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(_) => Self::not_found(err.to_string()),
            RepositoryError::DuplicateId(_) => Self::conflict(err.to_string()),
            RepositoryError::Database(ref db) => {
                tracing::error!(error = %db, "Customer store failure");
                match db {
                    sqlx::Error::Io(_)
                    | sqlx::Error::Tls(_)
                    | sqlx::Error::PoolTimedOut
                    | sqlx::Error::PoolClosed
                    | sqlx::Error::WorkerCrashed => Self::service_unavailable(err.to_string()),
                    _ => Self::internal_server_error(err.to_string()),
                }
            }
        }
    }
}

impl From<BalanceError> for ApiError {
    fn from(err: BalanceError) -> Self {
        tracing::error!(error = %err, "Balance lookup failed");
        Self::bad_gateway(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::from(RepositoryError::NotFound("42".to_string()));

        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Customer not found: 42");
    }

    #[test]
    fn duplicate_id_maps_to_409() {
        let err = ApiError::from(RepositoryError::DuplicateId("42".to_string()));

        assert_eq!(err.status, StatusCode::CONFLICT);
    }

    #[test]
    fn unreachable_database_maps_to_503() {
        let err = ApiError::from(RepositoryError::Database(sqlx::Error::PoolTimedOut));

        assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn unexpected_database_error_maps_to_500() {
        let err = ApiError::from(RepositoryError::Database(sqlx::Error::RowNotFound));

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn balance_error_maps_to_502() {
        let err = ApiError::from(BalanceError::Status(500));

        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
        assert_eq!(err.message, "Balance API returned status 500");
    }

    #[tokio::test]
    async fn response_body_carries_message() {
        let response = ApiError::bad_request("Please send a request body").into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Please send a request body");
    }
}
