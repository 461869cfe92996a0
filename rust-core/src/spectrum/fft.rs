//! FFT engine using rustfft
//!
//! Computes the full complex DFT of a real-valued, power-of-two length signal

use crate::error::AnalysisError;
use num_complex::Complex;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

/// Forward FFT for real-valued signals of a fixed power-of-two size
///
/// The planned transform is immutable, so a single engine can be shared
/// across threads analyzing different axes.
pub struct FftEngine {
    /// FFT size (number of samples)
    fft_size: usize,

    /// Forward FFT processor
    fft: Arc<dyn Fft<f64>>,
}

impl FftEngine {
    /// Create new FFT engine
    ///
    /// # Arguments
    /// * `fft_size` - FFT size, a power of two >= 2
    pub fn new(fft_size: usize) -> Result<Self, AnalysisError> {
        if fft_size < 2 || !fft_size.is_power_of_two() {
            return Err(AnalysisError::InvalidFftSize(fft_size));
        }

        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(fft_size);

        Ok(Self { fft_size, fft })
    }

    /// Compute the DFT X[k] = Σ x[n]·e^{-2πi·kn/P}
    ///
    /// # Arguments
    /// * `signal` - Real input signal (zero-padded if shorter than fft_size,
    ///   truncated if longer)
    ///
    /// # Returns
    /// `fft_size` complex coefficients
    pub fn transform(&self, signal: &[f64]) -> Vec<Complex<f64>> {
        let mut buffer = vec![Complex::new(0.0, 0.0); self.fft_size];
        for (slot, &x) in buffer.iter_mut().zip(signal.iter()) {
            slot.re = x;
        }

        self.fft.process(&mut buffer);
        buffer
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Get number of reported frequency bins (fft_size/2, Nyquist excluded)
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2
    }
}
