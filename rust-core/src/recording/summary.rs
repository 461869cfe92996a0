//! Effective sample-rate estimation
//!
//! Sensor timestamps are irregular, so the rate is derived from the span of
//! the recording rather than from nominal sensor settings.

use super::buffer::RecordingBuffer;
use crate::error::AnalysisError;

/// Timing summary of a recording
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordingSummary {
    pub sample_count: usize,
    pub duration_secs: f64,

    /// Effective sample rate in Hz: count / duration
    pub sample_rate_hz: f64,
}

/// Estimate the effective sample rate of a recording
///
/// # Arguments
/// * `buffer` - Completed recording
/// * `min_samples` - Minimum sample count for a usable spectrum
///
/// # Errors
/// * `InsufficientSamples` when the buffer holds fewer than `min_samples`
/// * `DegenerateRecording` when the duration is not positive
pub fn summarize(buffer: &RecordingBuffer, min_samples: usize) -> Result<RecordingSummary, AnalysisError> {
    let sample_count = buffer.len();
    if sample_count < min_samples {
        return Err(AnalysisError::InsufficientSamples {
            found: sample_count,
            required: min_samples,
        });
    }

    let duration_ms = buffer.duration_ms();
    let duration_secs = duration_ms as f64 / 1000.0;
    let sample_rate_hz = sample_count as f64 / duration_secs;

    if sample_count < 2 || duration_ms == 0 || !sample_rate_hz.is_finite() {
        return Err(AnalysisError::DegenerateRecording {
            sample_count,
            duration_ms: duration_ms as f64,
        });
    }

    Ok(RecordingSummary {
        sample_count,
        duration_secs,
        sample_rate_hz,
    })
}
