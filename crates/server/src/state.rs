use std::sync::Arc;

use claimcheck_core::{Config, FactCheckPipeline, SanitizedConfig};

/// Shared application state
pub struct AppState {
    config: Config,
    pipeline: Arc<FactCheckPipeline>,
}

impl AppState {
    pub fn new(config: Config, pipeline: Arc<FactCheckPipeline>) -> Self {
        Self { config, pipeline }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn pipeline(&self) -> &FactCheckPipeline {
        &self.pipeline
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }
}
