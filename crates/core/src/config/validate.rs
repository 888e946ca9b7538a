use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - OpenRouter API key is present
/// - Model identifiers are non-empty
/// - Search max_results is within 1..=10
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.openrouter.api_key.is_empty() {
        return Err(ConfigError::ValidationError(
            "openrouter.api_key must be set".to_string(),
        ));
    }

    if config.models.websearch.is_empty() {
        return Err(ConfigError::ValidationError(
            "models.websearch cannot be empty".to_string(),
        ));
    }

    if config.models.evaluation.is_empty() {
        return Err(ConfigError::ValidationError(
            "models.evaluation cannot be empty".to_string(),
        ));
    }

    if config.search.max_results == 0 || config.search.max_results > 10 {
        return Err(ConfigError::ValidationError(format!(
            "search.max_results must be between 1 and 10, got {}",
            config.search.max_results
        )));
    }

    Ok(())
}
