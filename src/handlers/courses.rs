use axum::{
    Json,
    extract::{Path, State},
};

use crate::db::models::{Course, EnrolledCourse};
use crate::error::RealtyError;
use crate::router::RealtyState;

pub async fn list_courses(
    State(state): State<RealtyState>,
) -> Result<Json<Vec<Course>>, RealtyError> {
    Ok(Json(state.catalog.list_courses().await?))
}

pub async fn list_user_courses(
    State(state): State<RealtyState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<EnrolledCourse>>, RealtyError> {
    Ok(Json(state.catalog.list_user_courses(user_id).await?))
}
