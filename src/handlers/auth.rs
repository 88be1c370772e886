use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::error::RealtyError;
use crate::router::RealtyState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
}

fn missing_credentials() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"error": "Username and password are required"})),
    )
        .into_response()
}

// Absent and empty-string fields are both rejected.
fn required(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}

pub async fn login(
    State(state): State<RealtyState>,
    Json(req): Json<LoginRequest>,
) -> Result<Response, RealtyError> {
    let (Some(username), Some(password)) = (required(req.username), required(req.password)) else {
        return Ok(missing_credentials());
    };

    match state.users.authenticate(&username, &password).await? {
        Some(user) => Ok((
            StatusCode::OK,
            Json(json!({"message": "Login successful", "user": user})),
        )
            .into_response()),
        None => Ok((
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Invalid credentials"})),
        )
            .into_response()),
    }
}

pub async fn register(
    State(state): State<RealtyState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Response, RealtyError> {
    let (Some(username), Some(password)) = (required(req.username), required(req.password)) else {
        return Ok(missing_credentials());
    };

    state
        .users
        .create_user(&username, &password, req.email.as_deref())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "Registration successful"})),
    )
        .into_response())
}
