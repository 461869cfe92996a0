//! Vibration Spectrum - Dominant Frequency Analysis Core
//!
//! Estimates the dominant vibration frequencies of each axis of a recorded
//! 3-axis motion signal.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod config;
pub mod error;
pub mod recording;
pub mod spectrum;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use recording::{Axis, RecordingBuffer, Sample};
pub use spectrum::{analyze_recording, RecordingAnalysis, SpectrumAnalyzer};
