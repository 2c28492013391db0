#![allow(dead_code)]

use async_trait::async_trait;
use fan_registry::application::services::{FanService, RegistrationOptions};
use fan_registry::domain::document::{Document, DocumentError, TextExtractor};
use fan_registry::infrastructure::ocr::NullExtractor;
use fan_registry::infrastructure::persistence::CsvFanRepository;
use fan_registry::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;

/// Extractor returning fixed text, standing in for OCR.
pub struct StaticExtractor(pub &'static str);

#[async_trait]
impl TextExtractor for StaticExtractor {
    async fn extract_text(&self, _document: &Document) -> Result<Option<String>, DocumentError> {
        Ok(Some(self.0.to_string()))
    }

    fn name(&self) -> &'static str {
        "static"
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

/// State backed by a CSV file inside a fresh temporary directory.
///
/// Keep the returned `TempDir` alive for the duration of the test.
pub fn create_test_state(
    extractor: Arc<dyn TextExtractor>,
    options: RegistrationOptions,
) -> (AppState, TempDir) {
    let dir = TempDir::new().unwrap();
    let repo = Arc::new(CsvFanRepository::new(dir.path().join("fans.csv")));
    let service = FanService::new(repo, extractor, options);

    (AppState::new(Arc::new(service)), dir)
}

pub fn create_default_state() -> (AppState, TempDir) {
    create_test_state(Arc::new(NullExtractor::new()), RegistrationOptions::default())
}

/// A complete, valid registration body.
pub fn registration_body(name: &str, cpf: &str) -> Value {
    json!({
        "name": name,
        "cpf": cpf,
        "birth_date": "1999-08-20",
        "address": "Av. Paulista, 1000",
        "instagram": "https://instagram.com/furiafan",
        "twitter": "",
        "interests": "FURIA, CS2",
        "events": "IEM Rio 2024",
        "purchases": "Jersey",
        "document": {
            "filename": "rg.png",
            // "fake image"
            "content_base64": "ZmFrZSBpbWFnZQ=="
        }
    })
}
