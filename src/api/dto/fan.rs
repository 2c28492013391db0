//! DTOs for fan registration and listing endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::{DocumentUpload, Registered, Registration};
use crate::domain::entities::Fan;

/// Request to register a new fan.
///
/// Length limits are enforced here; field semantics (CPF check digits, link
/// format, birth date range, document content) are checked by the
/// registration service so that every failure is reported at once.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterFanRequest {
    #[validate(length(max = 200, message = "Name is too long"))]
    pub name: String,

    #[validate(length(max = 32, message = "CPF is too long"))]
    pub cpf: String,

    pub birth_date: NaiveDate,

    #[serde(default)]
    #[validate(length(max = 500, message = "Address is too long"))]
    pub address: String,

    #[validate(length(max = 300, message = "Link is too long"))]
    pub instagram: Option<String>,

    #[validate(length(max = 300, message = "Link is too long"))]
    pub twitter: Option<String>,

    #[validate(length(max = 300, message = "Link is too long"))]
    pub tiktok: Option<String>,

    #[serde(default)]
    #[validate(length(max = 2000))]
    pub interests: String,

    #[serde(default)]
    #[validate(length(max = 2000))]
    pub events: String,

    #[serde(default)]
    #[validate(length(max = 2000))]
    pub purchases: String,

    #[validate(nested)]
    pub document: Option<DocumentPayload>,
}

/// Identity document encoded for JSON transport.
#[derive(Debug, Deserialize, Validate)]
pub struct DocumentPayload {
    #[validate(length(min = 1, max = 255, message = "Invalid file name"))]
    pub filename: String,

    pub content_base64: String,
}

impl From<RegisterFanRequest> for Registration {
    fn from(req: RegisterFanRequest) -> Self {
        Self {
            name: req.name,
            cpf: req.cpf,
            birth_date: req.birth_date,
            address: req.address,
            instagram: req.instagram,
            twitter: req.twitter,
            tiktok: req.tiktok,
            interests: req.interests,
            events: req.events,
            purchases: req.purchases,
            document: req.document.map(|d| DocumentUpload {
                filename: d.filename,
                content_base64: d.content_base64,
            }),
        }
    }
}

/// Response for a successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterFanResponse {
    pub fan: Fan,
    pub document_check: &'static str,
    pub warnings: Vec<String>,
}

impl From<Registered> for RegisterFanResponse {
    fn from(registered: Registered) -> Self {
        Self {
            fan: registered.fan,
            document_check: registered.document_check.as_str(),
            warnings: registered.warnings,
        }
    }
}

/// Response listing registered fans.
#[derive(Debug, Serialize)]
pub struct FanListResponse {
    pub total: usize,
    pub items: Vec<Fan>,
}
