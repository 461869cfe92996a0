//! Error taxonomy for recording analysis

use crate::recording::Axis;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Recording has {found} samples, at least {required} are required")]
    InsufficientSamples { found: usize, required: usize },

    #[error("Recording of {sample_count} samples spans {duration_ms} ms; sample rate is undefined")]
    DegenerateRecording { sample_count: usize, duration_ms: f64 },

    #[error("Spectrum for axis {axis} contained non-finite values; reporting zeros")]
    SpectrumComputationFailed { axis: Axis },

    #[error("Axis {axis}: found {found} dominant frequencies, {requested} requested")]
    InsufficientPeaks {
        axis: Axis,
        found: usize,
        requested: usize,
    },

    #[error("Sample {index} at {timestamp_ms} ms precedes previous sample at {previous_ms} ms")]
    UnorderedTimestamps {
        index: usize,
        previous_ms: u64,
        timestamp_ms: u64,
    },

    #[error("FFT size must be a power of two >= 2 (found: {0})")]
    InvalidFftSize(usize),

    #[error("Invalid analysis configuration: {0}")]
    InvalidConfig(String),
}

impl AnalysisError {
    /// Whether the condition aborts analysis of all three axes.
    ///
    /// Per-axis conditions are attached to the affected axis result instead.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            AnalysisError::SpectrumComputationFailed { .. } | AnalysisError::InsufficientPeaks { .. }
        )
    }

    /// Axis the condition is scoped to, if any
    pub fn axis(&self) -> Option<Axis> {
        match self {
            AnalysisError::SpectrumComputationFailed { axis }
            | AnalysisError::InsufficientPeaks { axis, .. } => Some(*axis),
            _ => None,
        }
    }
}
