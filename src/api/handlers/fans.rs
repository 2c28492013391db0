//! Handlers for fan registration and listing.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::fan::{FanListResponse, RegisterFanRequest, RegisterFanResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new fan.
///
/// # Endpoint
///
/// `POST /api/fans`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Maria Silva",
///   "cpf": "529.982.247-25",
///   "birth_date": "2000-01-01",
///   "address": "Rua A, 1",
///   "instagram": "https://instagram.com/maria",
///   "interests": "CS2",
///   "document": { "filename": "rg.png", "content_base64": "..." }
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the stored record, the document check outcome
/// (`verified`, `name_not_found`, `cpf_not_found`, `skipped`) and warnings.
///
/// # Errors
///
/// Returns 400 Bad Request with per-field messages if validation fails.
/// Returns 409 Conflict if the CPF is already registered.
pub async fn register_fan_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterFanRequest>,
) -> Result<(StatusCode, Json<RegisterFanResponse>), AppError> {
    payload.validate()?;

    let registered = state.fan_service.register(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(registered.into())))
}

/// Lists every registered fan.
///
/// # Endpoint
///
/// `GET /api/fans`
pub async fn list_fans_handler(
    State(state): State<AppState>,
) -> Result<Json<FanListResponse>, AppError> {
    let items = state.fan_service.list_fans().await?;

    Ok(Json(FanListResponse {
        total: items.len(),
        items,
    }))
}
