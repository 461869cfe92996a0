//! Analysis configuration
//!
//! Pipeline parameters that the host passes in explicitly. Loadable from TOML:
//!
//! ```toml
//! top_k = 3
//! min_samples = 4
//! window_type = "hann"
//! bin_mapping = "conventional"
//! apply_correction = false
//! parallel_axes = true
//! ```

use crate::error::AnalysisError;
use crate::spectrum::bins::BinMapping;
use crate::spectrum::windowing::WindowType;
use serde::{Deserialize, Serialize};

/// Recording analysis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of dominant frequencies reported per axis
    pub top_k: usize,

    /// Minimum recording length for a meaningful spectrum
    pub min_samples: usize,

    /// Window applied to the padded series before the FFT
    pub window_type: WindowType,

    /// Bin-to-frequency convention
    pub bin_mapping: BinMapping,

    /// Apply amplitude correction for windowing
    pub apply_correction: bool,

    /// Analyze the three axes concurrently
    pub parallel_axes: bool,
}

impl AnalysisConfig {
    pub const DEFAULT_TOP_K: usize = 3;
    pub const DEFAULT_MIN_SAMPLES: usize = 4;

    /// Parse and validate a TOML document; missing keys take defaults
    pub fn from_toml_str(source: &str) -> Result<Self, AnalysisError> {
        let config: Self =
            toml::from_str(source).map_err(|e| AnalysisError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.top_k == 0 {
            return Err(AnalysisError::InvalidConfig("top_k must be at least 1".into()));
        }
        if self.min_samples < 2 {
            return Err(AnalysisError::InvalidConfig(format!(
                "min_samples must be at least 2 (found: {})",
                self.min_samples
            )));
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_k: Self::DEFAULT_TOP_K,
            min_samples: Self::DEFAULT_MIN_SAMPLES,
            window_type: WindowType::Hann,
            bin_mapping: BinMapping::Conventional,
            apply_correction: false,
            parallel_axes: true,
        }
    }
}
