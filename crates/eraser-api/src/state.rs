use eraser_core::Config;
use eraser_processing::{CleaningPipeline, UploadValidator};

/// Shared, read-only application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub pipeline: CleaningPipeline,
    pub validator: UploadValidator,
}

impl AppState {
    pub fn new(config: Config, pipeline: CleaningPipeline) -> Self {
        let validator = UploadValidator::new(config.max_upload_size_bytes());
        Self {
            config,
            pipeline,
            validator,
        }
    }
}
