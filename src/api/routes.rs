//! API route configuration.

use crate::api::handlers::{
    list_fans_handler, register_fan_handler, validate_cpf_handler, validate_social_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET  /fans`                  - List registered fans
/// - `POST /fans`                  - Register a fan
/// - `POST /validate/cpf`          - Check a CPF
/// - `POST /validate/social-link`  - Check a social profile link
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/fans", get(list_fans_handler).post(register_fan_handler))
        .route("/validate/cpf", post(validate_cpf_handler))
        .route("/validate/social-link", post(validate_social_link_handler))
}
