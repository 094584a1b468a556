//! Configuration structures for the dominant color analyzer.
//!
//! All thresholds default to the reference behavior: alpha below 50 is
//! transparent, the navy bounding box is (50, 100, 150), and the report
//! lists the top 5 colors.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use dominant_colors::AnalyzerConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = AnalyzerConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = AnalyzerConfig::default();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::constants::{filter, report};
use serde::{Deserialize, Serialize};

/// Complete analyzer configuration.
///
/// Can be serialized to/from JSON for reproducible runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Minimum alpha for a pixel to be counted
    #[serde(default = "default_alpha_threshold")]
    pub alpha_threshold: u8,

    /// Background exclusion bounding box
    #[serde(default)]
    pub background: BackgroundFilterConfig,

    /// Number of ranked colors to report
    #[serde(default = "default_top_colors")]
    pub top_colors: usize,
}

/// Background exclusion parameters.
///
/// A pixel is skipped when all three channels are strictly below these
/// bounds. The defaults approximate a dark navy background (#00245d).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundFilterConfig {
    /// Exclusive upper bound for the red channel
    pub max_red: u8,

    /// Exclusive upper bound for the green channel
    pub max_green: u8,

    /// Exclusive upper bound for the blue channel
    pub max_blue: u8,
}

fn default_alpha_threshold() -> u8 {
    filter::MIN_VISIBLE_ALPHA
}

fn default_top_colors() -> usize {
    report::DEFAULT_TOP_COLORS
}

impl Default for BackgroundFilterConfig {
    fn default() -> Self {
        Self {
            max_red: filter::NAVY_MAX_RED,
            max_green: filter::NAVY_MAX_GREEN,
            max_blue: filter::NAVY_MAX_BLUE,
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            alpha_threshold: default_alpha_threshold(),
            background: BackgroundFilterConfig::default(),
            top_colors: default_top_colors(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
