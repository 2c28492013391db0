//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::FanService;
use crate::infrastructure::persistence::CsvFanRepository;

/// Registration service backed by the CSV record store.
pub type AppFanService = FanService<CsvFanRepository>;

#[derive(Clone)]
pub struct AppState {
    pub fan_service: Arc<AppFanService>,
}

impl AppState {
    pub fn new(fan_service: Arc<AppFanService>) -> Self {
        Self { fan_service }
    }
}
