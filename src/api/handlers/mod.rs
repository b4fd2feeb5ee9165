use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::api::{ApiError, AppState};
use crate::models::Snack;

// ============================================================
// Root
// ============================================================

/// Static acknowledgment; doubles as a liveness probe.
pub async fn root() -> &'static str {
    "API has received your request"
}

// ============================================================
// Snacks
// ============================================================

pub async fn list_snacks(State(state): State<AppState>) -> Json<HashMap<String, Snack>> {
    Json(state.directory.list())
}

pub async fn get_snack(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Snack>, ApiError> {
    state.validation.check_id(&id)?;

    state
        .directory
        .get(&id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Snack not found"))
}

pub async fn create_snack(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(snack): Json<Snack>,
) -> Result<impl IntoResponse, ApiError> {
    state.validation.check_id(&id)?;

    if !state.directory.try_insert(&id, snack.clone()) {
        return Err(ApiError::invalid_id("A snack with this id already exists"));
    }

    let location = format!("/snack/{id}");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(snack),
    ))
}

/// Upsert: overwrites or creates, no existence check by design of the
/// endpoint contract.
pub async fn upsert_snack(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(snack): Json<Snack>,
) -> StatusCode {
    state.directory.upsert(&id, snack);
    StatusCode::NO_CONTENT
}

pub async fn delete_snack(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Snack>, ApiError> {
    state
        .directory
        .remove(&id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Snack not found"))
}

// ============================================================
// Extras
// ============================================================

/// Non-standard status plus a pointer at a static asset. No file is
/// streamed; the body is just the path.
pub async fn secret() -> impl IntoResponse {
    let status = StatusCode::from_u16(420).expect("420 is a valid status code");
    (
        status,
        [(header::CONTENT_TYPE, "text/plain")],
        "assets/FunnyDoggie.jpg",
    )
}

/// Placeholder path that always reports not-found.
pub async fn throw_error() -> ApiError {
    ApiError::not_found("Nothing to see here")
}
