//! Windowing functions for spectral analysis
//!
//! Applies windows to time-domain signals before FFT to reduce spectral leakage

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowType {
    /// Hann window: w[n] = 0.5 - 0.5*cos(2πn/(M-1))
    /// Sidelobe attenuation: ~44 dB
    #[default]
    Hann,

    /// Hamming window: w[n] = 0.54 - 0.46*cos(2πn/(M-1))
    /// Sidelobe attenuation: ~53 dB
    Hamming,

    /// Blackman window: w[n] = 0.42 - 0.5*cos(2πn/(M-1)) + 0.08*cos(4πn/(M-1))
    /// Sidelobe attenuation: ~74 dB
    Blackman,

    /// Rectangular window (no windowing)
    Rectangular,
}

/// Generate window coefficients
///
/// # Arguments
/// * `window_type` - Type of window function
/// * `length` - Number of samples (M)
///
/// # Returns
/// Vector of window coefficients w[n] for n = 0..M-1. A single-sample
/// window is the window's midpoint value, 1.0.
pub fn generate_window(window_type: WindowType, length: usize) -> Vec<f64> {
    if length == 1 {
        return vec![1.0];
    }

    let m = length as f64;
    let mut window = Vec::with_capacity(length);

    match window_type {
        WindowType::Hann => {
            for n in 0..length {
                let angle = 2.0 * PI * n as f64 / (m - 1.0);
                window.push(0.5 * (1.0 - angle.cos()));
            }
        }

        WindowType::Hamming => {
            for n in 0..length {
                let angle = 2.0 * PI * n as f64 / (m - 1.0);
                window.push(0.54 - 0.46 * angle.cos());
            }
        }

        WindowType::Blackman => {
            for n in 0..length {
                let angle1 = 2.0 * PI * n as f64 / (m - 1.0);
                let angle2 = 4.0 * PI * n as f64 / (m - 1.0);
                window.push(0.42 - 0.5 * angle1.cos() + 0.08 * angle2.cos());
            }
        }

        WindowType::Rectangular => {
            window.resize(length, 1.0);
        }
    }

    window
}

/// Apply window to signal
///
/// # Returns
/// Windowed signal
pub fn apply_window(signal: &[f64], window_type: WindowType) -> Vec<f64> {
    let mut windowed = signal.to_vec();
    apply_window_inplace(&mut windowed, window_type);
    windowed
}

/// Apply window in-place
pub fn apply_window_inplace(signal: &mut [f64], window_type: WindowType) {
    let window = generate_window(window_type, signal.len());

    for (s, w) in signal.iter_mut().zip(window.iter()) {
        *s *= w;
    }
}

/// Calculate window correction factor
///
/// When applying windows, the signal amplitude is reduced. This factor
/// can be used to correct the FFT magnitude.
///
/// # Returns
/// Correction factor (multiply FFT magnitude by this), 1.0 for an empty window
pub fn window_correction_factor(window_type: WindowType, length: usize) -> f64 {
    let window = generate_window(window_type, length);
    let sum: f64 = window.iter().sum();
    if sum > 0.0 {
        length as f64 / sum
    } else {
        1.0
    }
}
