//! Handlers for standalone CPF and social link checks.
//!
//! Both endpoints always answer 200; an invalid value is reported as
//! `"valid": false`, never as an error.

use axum::Json;

use crate::api::dto::validate::{
    CpfCheckRequest, CpfCheckResponse, SocialLinkCheckRequest, SocialLinkCheckResponse,
};
use crate::utils::cpf::{format_cpf, normalize_cpf, validate_cpf};
use crate::utils::social_link::validate_social_link;

/// `POST /api/validate/cpf`
pub async fn validate_cpf_handler(Json(payload): Json<CpfCheckRequest>) -> Json<CpfCheckResponse> {
    Json(CpfCheckResponse {
        valid: validate_cpf(&payload.cpf),
        normalized: normalize_cpf(&payload.cpf),
        formatted: format_cpf(&payload.cpf),
    })
}

/// `POST /api/validate/social-link`
pub async fn validate_social_link_handler(
    Json(payload): Json<SocialLinkCheckRequest>,
) -> Json<SocialLinkCheckResponse> {
    Json(SocialLinkCheckResponse {
        valid: validate_social_link(&payload.url),
    })
}
