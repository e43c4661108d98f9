use std::env;

use business::domain::import::batch::DEFAULT_BATCH_SIZE;

/// Spreadsheet import settings
#[derive(Debug, Clone)]
pub struct ImportConfig {
    pub batch_size: usize,
}

impl ImportConfig {
    /// Load import configuration from environment variables
    ///
    /// Environment variables:
    /// - IMPORT_BATCH_SIZE: Rows per insert batch (default: 100)
    pub fn from_env() -> Self {
        Self::from_value(env::var("IMPORT_BATCH_SIZE").ok())
    }

    fn from_value(value: Option<String>) -> Self {
        let batch_size = value
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_BATCH_SIZE);

        Self { batch_size }
    }
}
