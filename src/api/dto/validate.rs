//! DTOs for the standalone validation endpoints.

use serde::{Deserialize, Serialize};

/// Request carrying a CPF candidate in any formatting.
#[derive(Debug, Deserialize)]
pub struct CpfCheckRequest {
    pub cpf: String,
}

/// CPF validation result.
#[derive(Debug, Serialize)]
pub struct CpfCheckResponse {
    pub valid: bool,
    /// Digits extracted from the input.
    pub normalized: String,
    /// `XXX.XXX.XXX-XX` form, present when exactly 11 digits were found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
}

/// Request carrying a social profile link.
#[derive(Debug, Deserialize)]
pub struct SocialLinkCheckRequest {
    pub url: String,
}

/// Social link validation result.
#[derive(Debug, Serialize)]
pub struct SocialLinkCheckResponse {
    pub valid: bool,
}
