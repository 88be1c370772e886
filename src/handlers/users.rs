use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::db::models::UserRecord;
use crate::error::RealtyError;
use crate::router::RealtyState;

pub async fn list_users(
    State(state): State<RealtyState>,
) -> Result<Json<Vec<UserRecord>>, RealtyError> {
    Ok(Json(state.users.list_users().await?))
}

pub async fn delete_user(
    State(state): State<RealtyState>,
    Path(user_id): Path<i64>,
) -> Result<Response, RealtyError> {
    if state.users.delete_user(user_id).await? {
        Ok((
            StatusCode::OK,
            Json(json!({"message": format!("User with ID {user_id} deleted successfully")})),
        )
            .into_response())
    } else {
        Ok((
            StatusCode::NOT_FOUND,
            Json(json!({"error": format!("User with ID {user_id} not found")})),
        )
            .into_response())
    }
}
