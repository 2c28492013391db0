//! Fan registration service.

use chrono::{Local, NaiveDate};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::document::{Document, DocumentCheck, TextExtractor, check_document_text};
use crate::domain::entities::{Fan, NewFan};
use crate::domain::repositories::FanRepository;
use crate::error::AppError;
use crate::utils::cpf::{mask_cpf, validate_cpf};
use crate::utils::social_link::{SocialPlatform, validate_social_link};

/// Earliest accepted birth date (1900-01-01).
pub fn min_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Identity document as uploaded by the client.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    pub filename: String,
    pub content_base64: String,
}

/// Raw registration data, before any validation.
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub cpf: String,
    pub birth_date: NaiveDate,
    pub address: String,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub tiktok: Option<String>,
    pub interests: String,
    pub events: String,
    pub purchases: String,
    pub document: Option<DocumentUpload>,
}

/// Knobs controlling document handling.
#[derive(Debug, Clone, Copy)]
pub struct RegistrationOptions {
    /// Maximum decoded document size in bytes.
    pub max_document_bytes: usize,
    /// When true, a name/CPF mismatch rejects the registration instead of
    /// producing a warning.
    pub strict_document_check: bool,
}

impl Default for RegistrationOptions {
    fn default() -> Self {
        Self {
            max_document_bytes: 5 * 1024 * 1024,
            strict_document_check: false,
        }
    }
}

/// Result of a successful registration.
#[derive(Debug, Clone)]
pub struct Registered {
    pub fan: Fan,
    pub document_check: DocumentCheck,
    pub warnings: Vec<String>,
}

/// Field name to error messages, serialized into [`AppError::Validation`] details.
type FieldErrors = BTreeMap<&'static str, Vec<String>>;

fn push_error(errors: &mut FieldErrors, field: &'static str, message: impl Into<String>) {
    errors.entry(field).or_default().push(message.into());
}

fn errors_to_details(errors: FieldErrors) -> Value {
    json!(errors)
}

/// Trims an optional text field, mapping blank input to `None`.
fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Checks every field of a registration and collects all failures.
///
/// Returns the decoded document when one was supplied and decoded cleanly.
fn validate_registration(
    registration: &Registration,
    today: NaiveDate,
    max_document_bytes: usize,
) -> (FieldErrors, Option<Document>) {
    let mut errors = FieldErrors::new();

    if registration.name.trim().is_empty() {
        push_error(&mut errors, "name", "Name must not be blank");
    }

    if !validate_cpf(&registration.cpf) {
        push_error(&mut errors, "cpf", "Invalid CPF");
    }

    let links = [
        ("instagram", SocialPlatform::Instagram, &registration.instagram),
        ("twitter", SocialPlatform::Twitter, &registration.twitter),
        ("tiktok", SocialPlatform::TikTok, &registration.tiktok),
    ];
    for (field, platform, link) in links {
        if let Some(url) = non_blank(link.as_deref())
            && !validate_social_link(&url)
        {
            push_error(&mut errors, field, format!("Invalid {} link", platform.label()));
        }
    }

    if registration.birth_date < min_birth_date() || registration.birth_date > today {
        push_error(&mut errors, "birth_date", "Birth date out of range");
    }

    let document = match &registration.document {
        None => {
            push_error(&mut errors, "document", "Identity document was not provided");
            None
        }
        Some(upload) => {
            match Document::from_base64(&upload.filename, &upload.content_base64, max_document_bytes)
            {
                Ok(doc) => Some(doc),
                Err(e) => {
                    push_error(&mut errors, "document", format!("Failed to read document: {e}"));
                    None
                }
            }
        }
    };

    (errors, document)
}

/// Service registering fans after validating their data and identity document.
///
/// # Flow
///
/// 1. Validate all fields, collecting every failure
/// 2. Reject already registered CPFs
/// 3. Extract document text and cross-check the declared name and CPF
/// 4. Append the record to the store
pub struct FanService<R: FanRepository> {
    repository: Arc<R>,
    extractor: Arc<dyn TextExtractor>,
    options: RegistrationOptions,
}

impl<R: FanRepository> FanService<R> {
    /// Creates a new fan service.
    pub fn new(
        repository: Arc<R>,
        extractor: Arc<dyn TextExtractor>,
        options: RegistrationOptions,
    ) -> Self {
        Self {
            repository,
            extractor,
            options,
        }
    }

    /// Registers a fan, using the local date as "today".
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with per-field messages if any field
    /// is invalid, the document cannot be read, or (in strict mode) the
    /// document does not match the declared data.
    /// Returns [`AppError::Conflict`] if the CPF is already registered.
    /// Returns [`AppError::Internal`] on record store failures.
    pub async fn register(&self, registration: Registration) -> Result<Registered, AppError> {
        self.register_on(registration, Local::now().date_naive()).await
    }

    /// Registers a fan, validating the birth date against `today`.
    ///
    /// # Errors
    ///
    /// See [`FanService::register`].
    pub async fn register_on(
        &self,
        registration: Registration,
        today: NaiveDate,
    ) -> Result<Registered, AppError> {
        let (errors, document) =
            validate_registration(&registration, today, self.options.max_document_bytes);

        if !errors.is_empty() {
            tracing::warn!(
                fields = ?errors.keys().collect::<Vec<_>>(),
                "Registration rejected"
            );
            return Err(AppError::bad_request(
                "Registration is invalid",
                errors_to_details(errors),
            ));
        }

        let cpf = registration.cpf.trim().to_string();

        if self.repository.exists_by_cpf(&cpf).await? {
            return Err(AppError::conflict(
                "This CPF is already registered",
                json!({ "field": "cpf" }),
            ));
        }

        let document_check = match document {
            Some(doc) => self.check_document(&doc, &registration.name, &cpf).await?,
            None => DocumentCheck::Skipped,
        };

        let mut warnings = Vec::new();
        if let Some(message) = document_check.mismatch_message() {
            if self.options.strict_document_check {
                let mut errors = FieldErrors::new();
                push_error(&mut errors, "document", message);
                return Err(AppError::bad_request(
                    "Registration is invalid",
                    errors_to_details(errors),
                ));
            }
            warnings.push(message.to_string());
        }
        if document_check == DocumentCheck::Skipped {
            warnings.push("Document text extraction is disabled; name and CPF were not checked".to_string());
        }

        let new_fan = NewFan {
            name: registration.name.trim().to_string(),
            cpf,
            birth_date: registration.birth_date,
            address: registration.address.trim().to_string(),
            instagram: non_blank(registration.instagram.as_deref()),
            twitter: non_blank(registration.twitter.as_deref()),
            tiktok: non_blank(registration.tiktok.as_deref()),
            interests: registration.interests.trim().to_string(),
            events: registration.events.trim().to_string(),
            purchases: registration.purchases.trim().to_string(),
        };

        let fan = self.repository.insert(new_fan).await?;

        tracing::info!(
            cpf = %mask_cpf(&fan.cpf),
            document_check = document_check.as_str(),
            "Fan registered"
        );

        Ok(Registered {
            fan,
            document_check,
            warnings,
        })
    }

    /// Lists registered fans.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on record store failures.
    pub async fn list_fans(&self) -> Result<Vec<Fan>, AppError> {
        self.repository.list().await
    }

    /// Runs text extraction and compares the result with the declared data.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the extractor fails.
    pub async fn check_document(
        &self,
        document: &Document,
        name: &str,
        cpf: &str,
    ) -> Result<DocumentCheck, AppError> {
        let text = self.extractor.extract_text(document).await.map_err(|e| {
            tracing::warn!(extractor = self.extractor.name(), "Document extraction failed: {}", e);
            let mut errors = FieldErrors::new();
            push_error(&mut errors, "document", format!("Failed to read document: {e}"));
            AppError::bad_request("Registration is invalid", errors_to_details(errors))
        })?;

        Ok(match text {
            Some(text) => check_document_text(&text, name, cpf),
            None => DocumentCheck::Skipped,
        })
    }

    /// Name of the configured text extractor.
    pub fn extractor_name(&self) -> &'static str {
        self.extractor.name()
    }

    /// Whether document text extraction is active.
    pub fn extraction_enabled(&self) -> bool {
        self.extractor.is_enabled()
    }
}
