use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::db::models::{NewValuation, ValuationSummary};
use crate::error::RealtyError;
use crate::router::RealtyState;

pub async fn create_valuation(
    State(state): State<RealtyState>,
    Json(req): Json<NewValuation>,
) -> Result<Response, RealtyError> {
    let id = state.valuations.create_valuation(&req).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "Valuation saved successfully", "id": id})),
    )
        .into_response())
}

pub async fn list_user_valuations(
    State(state): State<RealtyState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<ValuationSummary>>, RealtyError> {
    Ok(Json(state.valuations.list_user_valuations(user_id).await?))
}
