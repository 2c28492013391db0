//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! export FANS_CSV_PATH="data/dados_fas.csv"
//! export TESSERACT_CMD="/usr/bin/tesseract"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `FANS_CSV_PATH` - Record store file (default: `dados_fas.csv`)
//! - `TESSERACT_CMD` - OCR executable; document cross-check is skipped when unset
//! - `DOCUMENT_MAX_BYTES` - Maximum decoded document size (default: 5 MiB)
//! - `DOCUMENT_CHECK_STRICT` - Reject registrations whose document does not
//!   contain the declared name and CPF (default: `false`)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

use crate::application::services::RegistrationOptions;

const DEFAULT_DOCUMENT_MAX_BYTES: usize = 5 * 1024 * 1024;
const MIN_DOCUMENT_MAX_BYTES: usize = 1024;
const MAX_DOCUMENT_MAX_BYTES: usize = 50 * 1024 * 1024;

/// Extra room in the request body for the JSON fields around the document.
const BODY_OVERHEAD_BYTES: usize = 64 * 1024;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// CSV file holding registered fans.
    pub fans_csv_path: PathBuf,
    /// OCR executable. `None` disables document text extraction.
    pub tesseract_cmd: Option<PathBuf>,
    pub document_max_bytes: usize,
    pub document_check_strict: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults; range checks
    /// happen in [`Config::validate`].
    ///
    /// # Errors
    ///
    /// Currently infallible; kept fallible so required variables can be added.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let fans_csv_path = env::var("FANS_CSV_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("dados_fas.csv"));

        let tesseract_cmd = env::var("TESSERACT_CMD")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let document_max_bytes = env::var("DOCUMENT_MAX_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_DOCUMENT_MAX_BYTES);

        let document_check_strict = env::var("DOCUMENT_CHECK_STRICT")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            fans_csv_path,
            tesseract_cmd,
            document_max_bytes,
            document_check_strict,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `fans_csv_path` is empty
    /// - `document_max_bytes` is outside 1 KiB ..= 50 MiB
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.fans_csv_path.as_os_str().is_empty() {
            anyhow::bail!("FANS_CSV_PATH must not be empty");
        }

        if !(MIN_DOCUMENT_MAX_BYTES..=MAX_DOCUMENT_MAX_BYTES).contains(&self.document_max_bytes) {
            anyhow::bail!(
                "DOCUMENT_MAX_BYTES must be between {} and {}, got {}",
                MIN_DOCUMENT_MAX_BYTES,
                MAX_DOCUMENT_MAX_BYTES,
                self.document_max_bytes
            );
        }

        Ok(())
    }

    /// Document handling options for the registration service.
    pub fn registration_options(&self) -> RegistrationOptions {
        RegistrationOptions {
            max_document_bytes: self.document_max_bytes,
            strict_document_check: self.document_check_strict,
        }
    }

    /// Request body limit large enough for a base64 document of the maximum size.
    pub fn request_body_limit(&self) -> usize {
        self.document_max_bytes.div_ceil(3) * 4 + BODY_OVERHEAD_BYTES
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Record store: {}", self.fans_csv_path.display());
        match &self.tesseract_cmd {
            Some(cmd) => tracing::info!("  OCR: {} (enabled)", cmd.display()),
            None => tracing::info!("  OCR: disabled"),
        }
        tracing::info!("  Document max size: {} bytes", self.document_max_bytes);
        tracing::info!("  Strict document check: {}", self.document_check_strict);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
