// AI configuration type definitions

use serde::Deserialize;

/// Default debounce delay before dispatching an API request
fn default_debounce_ms() -> u64 {
    250
}

/// Default max tokens for lesson responses
fn default_max_tokens() -> u32 {
    4096
}

/// Default Gemini model (matches the hosted service)
fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_enabled() -> bool {
    true
}

/// Gemini-specific configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    /// API key; the GEMINI_API_KEY environment variable takes precedence
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            api_key: None,
            model: default_model(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// AI configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Whether AI requests are enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Debounce delay in milliseconds before dispatching a request
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Gemini-specific configuration
    #[serde(default)]
    pub gemini: GeminiConfig,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            enabled: default_enabled(),
            debounce_ms: default_debounce_ms(),
            gemini: GeminiConfig::default(),
        }
    }
}
