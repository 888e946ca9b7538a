use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub openrouter: OpenRouterConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub models: ModelsConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    "0.0.0.0".parse().unwrap()
}

fn default_port() -> u16 {
    8080
}

/// OpenRouter provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenRouterConfig {
    /// API base URL (e.g., "https://openrouter.ai/api/v1")
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// OpenRouter API key
    pub api_key: String,
    /// Optional request timeout in seconds. Unset means the HTTP client's
    /// transport defaults apply.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_api_url() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

/// Evidence search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Maximum search results to request per claim. Advisory: the provider
    /// may return fewer.
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
        }
    }
}

fn default_max_results() -> u32 {
    5
}

/// Per-use-case model identifiers
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelsConfig {
    /// Model for the websearch step. The `:online` capability suffix is
    /// appended at call time, not here.
    #[serde(default = "default_websearch_model")]
    pub websearch: String,
    /// Model for the evaluation step.
    #[serde(default = "default_evaluation_model")]
    pub evaluation: String,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            websearch: default_websearch_model(),
            evaluation: default_evaluation_model(),
        }
    }
}

fn default_websearch_model() -> String {
    "x-ai/grok-4-fast".to_string()
}

fn default_evaluation_model() -> String {
    "openai/gpt-4o-mini".to_string()
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub openrouter: SanitizedOpenRouterConfig,
    pub search: SearchConfig,
    pub models: ModelsConfig,
}

/// Sanitized OpenRouter config (API key hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedOpenRouterConfig {
    pub api_url: String,
    pub api_key_configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            openrouter: SanitizedOpenRouterConfig {
                api_url: config.openrouter.api_url.clone(),
                api_key_configured: !config.openrouter.api_key.is_empty(),
                timeout_secs: config.openrouter.timeout_secs,
            },
            search: config.search.clone(),
            models: config.models.clone(),
        }
    }
}
