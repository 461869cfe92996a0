//! Normalized magnitude spectrum over non-negative frequencies

use num_complex::Complex;

/// Magnitude spectrum |X[k]| / P for k = 0..P/2 (Nyquist excluded)
#[derive(Debug, Clone, PartialEq)]
pub struct MagnitudeSpectrum {
    magnitudes: Vec<f64>,
    degraded: bool,
}

impl MagnitudeSpectrum {
    /// Build the spectrum from DFT coefficients
    ///
    /// # Arguments
    /// * `coefficients` - DFT output, at least `padded_len / 2` entries
    /// * `padded_len` - Length of the transformed (padded) signal
    ///
    /// Missing coefficients or any non-finite magnitude degrade the whole
    /// spectrum to zeros of the same length.
    pub fn from_coefficients(coefficients: &[Complex<f64>], padded_len: usize) -> Self {
        let num_bins = padded_len / 2;
        if coefficients.len() < num_bins {
            return Self::zeros(padded_len);
        }

        let scale = padded_len as f64;
        let magnitudes: Vec<f64> = coefficients[..num_bins]
            .iter()
            .map(|c| c.norm() / scale)
            .collect();

        if magnitudes.iter().any(|m| !m.is_finite()) {
            return Self::zeros(padded_len);
        }

        Self {
            magnitudes,
            degraded: false,
        }
    }

    /// All-zero spectrum standing in for a failed computation
    pub fn zeros(padded_len: usize) -> Self {
        Self {
            magnitudes: vec![0.0; padded_len / 2],
            degraded: true,
        }
    }

    pub fn magnitudes(&self) -> &[f64] {
        &self.magnitudes
    }

    pub fn into_magnitudes(self) -> Vec<f64> {
        self.magnitudes
    }

    /// Whether the spectrum was replaced by zeros
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_half_spectrum() {
        let coefficients = vec![
            Complex::new(8.0, 0.0),
            Complex::new(3.0, 4.0),
            Complex::new(0.0, -2.0),
            Complex::new(1.0, 0.0),
            Complex::new(9.0, 9.0),
            Complex::new(9.0, 9.0),
            Complex::new(9.0, 9.0),
            Complex::new(3.0, -4.0),
        ];

        let spectrum = MagnitudeSpectrum::from_coefficients(&coefficients, 8);

        assert!(!spectrum.is_degraded());
        assert_eq!(spectrum.len(), 4);
        assert_eq!(spectrum.magnitudes(), &[1.0, 0.625, 0.25, 0.125]);
    }

    #[test]
    fn test_non_finite_degrades_to_zeros() {
        let mut coefficients = vec![Complex::new(1.0, 0.0); 16];
        coefficients[3] = Complex::new(f64::NAN, 0.0);

        let spectrum = MagnitudeSpectrum::from_coefficients(&coefficients, 16);

        assert!(spectrum.is_degraded());
        assert_eq!(spectrum.magnitudes(), &[0.0; 8]);
    }

    #[test]
    fn test_non_finite_above_nyquist_is_ignored() {
        let mut coefficients = vec![Complex::new(1.0, 0.0); 16];
        coefficients[12] = Complex::new(f64::INFINITY, 0.0);

        let spectrum = MagnitudeSpectrum::from_coefficients(&coefficients, 16);
        assert!(!spectrum.is_degraded());
    }

    #[test]
    fn test_truncated_coefficients_degrade() {
        let coefficients = vec![Complex::new(1.0, 1.0); 3];
        let spectrum = MagnitudeSpectrum::from_coefficients(&coefficients, 16);

        assert!(spectrum.is_degraded());
        assert_eq!(spectrum.len(), 8);
    }
}
