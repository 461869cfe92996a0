//! Spectral analysis with FFT

pub mod analysis;
pub mod bins;
pub mod fft;
pub mod magnitude;
pub mod padding;
pub mod peaks;
pub mod windowing;

pub use analysis::{analyze_recording, AxisSpectrum, RecordingAnalysis, SpectrumAnalyzer};
pub use bins::{frequency_axis, BinMapping};
pub use fft::FftEngine;
pub use magnitude::MagnitudeSpectrum;
pub use padding::{padded_length, zero_pad};
pub use peaks::{dominant_frequencies, DominantFrequency};
pub use windowing::{apply_window, generate_window, WindowType};
