//! Per-recording spectrum analyzer
//!
//! Runs sample-rate estimation once, then windowing, FFT, magnitude, bin
//! mapping and peak extraction independently for each axis.

use super::bins::frequency_axis;
use super::fft::FftEngine;
use super::magnitude::MagnitudeSpectrum;
use super::padding::{padded_length, zero_pad};
use super::peaks::{dominant_frequencies, DominantFrequency};
use super::windowing::{apply_window_inplace, window_correction_factor};
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::recording::{summarize, Axis, RecordingBuffer, RecordingSummary};
use tracing::{debug, warn};

/// Spectrum and peaks for one axis
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpectrum {
    pub axis: Axis,

    /// Frequency of each bin in Hz
    pub frequencies: Vec<f64>,

    /// Normalized magnitude of each bin, index-aligned with `frequencies`
    pub magnitudes: Vec<f64>,

    /// Strongest non-DC bins, magnitude descending
    pub dominant: Vec<DominantFrequency>,

    /// Non-fatal conditions: `SpectrumComputationFailed`, `InsufficientPeaks`
    pub issues: Vec<AnalysisError>,
}

impl AxisSpectrum {
    /// Whether the magnitudes were replaced by zeros
    pub fn is_degraded(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| matches!(issue, AnalysisError::SpectrumComputationFailed { .. }))
    }

    /// Magnitude spectrum in dB: 20*log10(|X[k]|/reference)
    pub fn magnitudes_db(&self, reference: f64) -> Vec<f64> {
        self.magnitudes
            .iter()
            .map(|&mag| {
                let mag_clamped = mag.max(1e-10); // Avoid log(0)
                20.0 * (mag_clamped / reference).log10()
            })
            .collect()
    }
}

/// Result of analyzing one recording
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingAnalysis {
    pub summary: RecordingSummary,

    /// Transform length P
    pub padded_len: usize,

    /// Spacing between frequency bins in Hz
    pub bin_width_hz: f64,

    pub x: AxisSpectrum,
    pub y: AxisSpectrum,
    pub z: AxisSpectrum,
}

impl RecordingAnalysis {
    pub fn axis(&self, axis: Axis) -> &AxisSpectrum {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    /// All non-fatal conditions across axes
    pub fn issues(&self) -> impl Iterator<Item = &AnalysisError> {
        [&self.x, &self.y, &self.z]
            .into_iter()
            .flat_map(|spectrum| spectrum.issues.iter())
    }
}

/// Shared per-recording state for the axis pipelines
struct AxisPlan<'a> {
    buffer: &'a RecordingBuffer,
    engine: FftEngine,
    sample_rate_hz: f64,
    correction_factor: f64,
}

/// Recording spectrum analyzer
#[derive(Debug, Clone, Default)]
pub struct SpectrumAnalyzer {
    config: AnalysisConfig,
}

impl SpectrumAnalyzer {
    /// Create new spectrum analyzer
    pub fn new(config: AnalysisConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze a completed recording
    ///
    /// # Errors
    /// `InsufficientSamples` or `DegenerateRecording` abort all three axes.
    /// Per-axis failures are reported in each `AxisSpectrum::issues`.
    pub fn analyze_recording(&self, buffer: &RecordingBuffer) -> Result<RecordingAnalysis, AnalysisError> {
        let summary = summarize(buffer, self.config.min_samples)?;
        let padded_len = padded_length(summary.sample_count);
        let engine = FftEngine::new(padded_len)?;

        debug!(
            sample_count = summary.sample_count,
            duration_secs = summary.duration_secs,
            sample_rate_hz = summary.sample_rate_hz,
            padded_len,
            "Estimated recording sample rate"
        );

        let correction_factor = if self.config.apply_correction {
            window_correction_factor(self.config.window_type, padded_len)
        } else {
            1.0
        };

        let plan = AxisPlan {
            buffer,
            engine,
            sample_rate_hz: summary.sample_rate_hz,
            correction_factor,
        };

        let (x, y, z) = if self.config.parallel_axes {
            let (x, (y, z)) = rayon::join(
                || self.analyze_axis(&plan, Axis::X),
                || {
                    rayon::join(
                        || self.analyze_axis(&plan, Axis::Y),
                        || self.analyze_axis(&plan, Axis::Z),
                    )
                },
            );
            (x, y, z)
        } else {
            (
                self.analyze_axis(&plan, Axis::X),
                self.analyze_axis(&plan, Axis::Y),
                self.analyze_axis(&plan, Axis::Z),
            )
        };

        Ok(RecordingAnalysis {
            summary,
            padded_len,
            bin_width_hz: self.config.bin_mapping.bin_width(summary.sample_rate_hz, padded_len),
            x,
            y,
            z,
        })
    }

    fn analyze_axis(&self, plan: &AxisPlan<'_>, axis: Axis) -> AxisSpectrum {
        let padded_len = plan.engine.fft_size();
        let mut issues = Vec::new();

        // Pad first, then window the full padded length
        let mut series = zero_pad(&plan.buffer.axis_series(axis));
        apply_window_inplace(&mut series, self.config.window_type);

        let coefficients = plan.engine.transform(&series);
        let spectrum = MagnitudeSpectrum::from_coefficients(&coefficients, padded_len);
        if spectrum.is_degraded() {
            warn!(%axis, "Spectrum contained non-finite values, reporting zeros");
            issues.push(AnalysisError::SpectrumComputationFailed { axis });
        }

        let mut magnitudes = spectrum.into_magnitudes();
        if plan.correction_factor != 1.0 {
            for m in magnitudes.iter_mut() {
                *m *= plan.correction_factor;
            }
        }

        let frequencies = frequency_axis(
            magnitudes.len(),
            plan.sample_rate_hz,
            padded_len,
            self.config.bin_mapping,
        );

        let dominant = dominant_frequencies(&frequencies, &magnitudes, self.config.top_k);
        if dominant.len() < self.config.top_k {
            debug!(%axis, found = dominant.len(), requested = self.config.top_k, "Insufficient spectral peaks");
            issues.push(AnalysisError::InsufficientPeaks {
                axis,
                found: dominant.len(),
                requested: self.config.top_k,
            });
        }

        AxisSpectrum {
            axis,
            frequencies,
            magnitudes,
            dominant,
            issues,
        }
    }
}

/// Analyze a completed recording with the given configuration
pub fn analyze_recording(buffer: &RecordingBuffer, config: &AnalysisConfig) -> Result<RecordingAnalysis, AnalysisError> {
    SpectrumAnalyzer::new(config.clone())?.analyze_recording(buffer)
}
