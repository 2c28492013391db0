//! HTTP server initialization and runtime setup.
//!
//! Wires the record store, the text extractor and the Axum server lifecycle.

use crate::application::services::FanService;
use crate::config::Config;
use crate::domain::document::TextExtractor;
use crate::infrastructure::ocr::{NullExtractor, TesseractExtractor};
use crate::infrastructure::persistence::CsvFanRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Picks the text extractor matching the configuration.
pub fn build_extractor(config: &Config) -> Arc<dyn TextExtractor> {
    match &config.tesseract_cmd {
        Some(cmd) => {
            tracing::info!("Document text extraction enabled ({})", cmd.display());
            Arc::new(TesseractExtractor::new(cmd))
        }
        None => {
            tracing::info!("Document text extraction disabled (NullExtractor)");
            Arc::new(NullExtractor::new())
        }
    }
}

/// Builds the shared state from configuration.
pub fn build_state(config: &Config) -> AppState {
    let repository = Arc::new(CsvFanRepository::new(&config.fans_csv_path));
    let fan_service = FanService::new(
        repository,
        build_extractor(config),
        config.registration_options(),
    );

    AppState::new(Arc::new(fan_service))
}

/// Runs the HTTP server with the given configuration.
///
/// Stops gracefully on Ctrl+C.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config);
    let app = app_router(state, config.request_body_limit());

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
