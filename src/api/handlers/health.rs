//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Record store readable
/// - **503 Service Unavailable**: Record store cannot be read
///
/// A disabled text extractor is reported but does not degrade the service.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_record_store(&state).await;
    let extractor_check = check_text_extractor(&state);

    let healthy = store_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            record_store: store_check,
            text_extractor: extractor_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Reads the record store.
async fn check_record_store(state: &AppState) -> CheckStatus {
    match state.fan_service.list_fans().await {
        Ok(fans) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} fans registered", fans.len())),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Record store error: {}", e)),
        },
    }
}

fn check_text_extractor(state: &AppState) -> CheckStatus {
    if state.fan_service.extraction_enabled() {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Using {}", state.fan_service.extractor_name())),
        }
    } else {
        CheckStatus {
            status: "disabled".to_string(),
            message: Some("Document name/CPF cross-check is skipped".to_string()),
        }
    }
}
