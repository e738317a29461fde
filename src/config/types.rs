// Configuration type definitions

use serde::Deserialize;

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
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// Example query configuration section
///
/// An empty list keeps the built-in examples.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExamplesConfig {
    #[serde(default)]
    pub queries: Vec<String>,
}

/// Startup health check configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct HealthConfig {
    #[serde(default = "default_check_on_start")]
    pub check_on_start: bool,
}

fn default_check_on_start() -> bool {
    true
}

impl Default for HealthConfig {
    fn default() -> Self {
        HealthConfig {
            check_on_start: true,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub examples: ExamplesConfig,
    #[serde(default)]
    pub health: HealthConfig,
}
