use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use crate::service::{StockError, StockService};

use super::responses::*;

/// Shared application state
pub type AppState = Arc<StockService>;

/// Convert StockError to HTTP response
impl IntoResponse for StockError {
    fn into_response(self) -> Response {
        let status = match &self {
            StockError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            StockError::NotFound => StatusCode::NOT_FOUND,
            StockError::InvalidInput => StatusCode::BAD_REQUEST,
            StockError::ConstraintViolation(_) => StatusCode::BAD_REQUEST,
            StockError::Database(e) => {
                tracing::error!("Stock store failure: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::DatabaseError;

    #[test]
    fn test_error_status_codes() {
        let cases = [
            (StockError::null_field("Stock id"), StatusCode::BAD_REQUEST),
            (StockError::NotFound, StatusCode::NOT_FOUND),
            (StockError::InvalidInput, StatusCode::BAD_REQUEST),
            (
                StockError::ConstraintViolation("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                StockError::Database(DatabaseError::QueryError("down".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
