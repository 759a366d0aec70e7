// Configuration type definitions

use serde::Deserialize;

use super::ai_types::AiConfig;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

fn default_show_ms() -> u64 {
    4000
}

fn default_exit_ms() -> u64 {
    300
}

/// Toast timing configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    /// How long a toast stays fully visible, in milliseconds
    #[serde(default = "default_show_ms")]
    pub show_ms: u64,
    /// Length of the dimmed leaving phase, in milliseconds
    #[serde(default = "default_exit_ms")]
    pub exit_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            show_ms: default_show_ms(),
            exit_ms: default_exit_ms(),
        }
    }
}

fn default_max_entries() -> usize {
    50
}

/// History configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    /// Cap on the persisted history list
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig {
            max_entries: default_max_entries(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub notification: NotificationConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub ai: AiConfig,
}
