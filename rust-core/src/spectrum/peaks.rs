//! Dominant-frequency extraction
//!
//! Ranks spectrum bins by magnitude, skipping DC.

/// A ranked spectral peak
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DominantFrequency {
    /// Spectrum index of the peak (never 0)
    pub bin: usize,
    pub frequency_hz: f64,
    pub magnitude: f64,
}

/// Select the `top_k` strongest bins
///
/// Index 0 is excluded. Non-finite magnitudes count as zero and zero or
/// negative magnitudes are dropped, so fewer than `top_k` entries may come
/// back. Equal magnitudes keep ascending-frequency order.
///
/// # Arguments
/// * `frequencies` - Frequency axis in Hz
/// * `magnitudes` - Magnitude spectrum, index-aligned with `frequencies`
/// * `top_k` - Maximum number of peaks to return
pub fn dominant_frequencies(frequencies: &[f64], magnitudes: &[f64], top_k: usize) -> Vec<DominantFrequency> {
    debug_assert_eq!(frequencies.len(), magnitudes.len());

    let mut candidates: Vec<DominantFrequency> = frequencies
        .iter()
        .zip(magnitudes.iter())
        .enumerate()
        .skip(1)
        .map(|(bin, (&frequency_hz, &magnitude))| DominantFrequency {
            bin,
            frequency_hz,
            magnitude: if magnitude.is_finite() { magnitude } else { 0.0 },
        })
        .filter(|peak| peak.magnitude > 0.0)
        .collect();

    // Stable sort keeps ties in bin order
    candidates.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude));
    candidates.truncate(top_k);
    candidates
}
