use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum RealtyError {
    /// A uniqueness invariant (username or email) was violated on insert.
    #[error("username or email already exists")]
    Conflict,

    #[error("database error: {0}")]
    Database(#[from] SqlxError),
}

impl RealtyError {
    /// Classify a sqlx failure: unique-constraint violations become
    /// `Conflict`, everything else stays a storage error.
    pub fn from_insert(e: SqlxError) -> Self {
        match &e {
            SqlxError::Database(db) if db.is_unique_violation() => RealtyError::Conflict,
            _ => RealtyError::Database(e),
        }
    }
}

impl IntoResponse for RealtyError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            RealtyError::Conflict => (
                StatusCode::CONFLICT,
                ErrorBody {
                    error: "Username or email already exists".to_string(),
                },
            ),
            RealtyError::Database(e) => {
                error!(error = %e, "database operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "An internal server error occurred".to_string(),
                    },
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

/// Standardized API error response body.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}
