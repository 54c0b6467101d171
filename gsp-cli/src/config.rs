//! GSP configuration loading from `.gsprc.toml`.
//!
//! Configuration is optional. Missing sections fall back to defaults, and a file
//! that cannot be read or parsed is reported and ignored.
//!
//! # Example Configuration
//!
//! ```toml
//! [generator]
//! size = 7
//! seed = 42
//! extra_edges = 0
//!
//! [signal]
//! values = [3.0, 4.0, 5.0, 7.0, 11.0, 13.0, 17.0]
//! normalize = false
//!
//! [output]
//! format = "table"
//! color = true
//! ```

use gsp_core::GeneratorConfig;
use serde::Deserialize;
use std::path::Path;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = ".gsprc.toml";

/// Root configuration structure loaded from `.gsprc.toml`.
#[derive(Debug, Deserialize, Default)]
pub struct GspConfig {
    /// Random graph generation defaults.
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Default input signal.
    #[serde(default)]
    pub signal: SignalConfig,

    /// Output formatting preferences.
    #[serde(default)]
    pub output: OutputSettings,
}

/// Input signal defaults.
#[derive(Debug, Deserialize, Default)]
pub struct SignalConfig {
    /// Values assigned to nodes `0, 1, ...`. Nodes past the end stay at zero.
    #[serde(default)]
    pub values: Option<Vec<f64>>,

    /// Standardize the signal to zero mean and unit deviation before use.
    #[serde(default)]
    pub normalize: bool,
}

/// Output formatting preferences.
///
/// Command-line flags (e.g., `--format json`) override these settings.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Default output format: `table`, `json` or `csv`.
    #[serde(default)]
    pub format: Option<String>,

    /// Whether to use colored output. Auto-detected when unset.
    #[serde(default)]
    pub color: Option<bool>,
}

impl GspConfig {
    /// Load configuration from `.gsprc.toml` in the given directory.
    ///
    /// Returns defaults if the file is absent. Read and parse errors are logged
    /// as warnings.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                }
            }
        }
        Self::default()
    }

    /// Get the default output format, if configured.
    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    /// Configured color override, or `None` to auto-detect.
    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }
}
