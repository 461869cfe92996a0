//! Frequency-bin mapping
//!
//! Maps spectrum indices to Hz given an estimated sample rate. frequency[i]
//! always describes magnitude[i].

use serde::{Deserialize, Serialize};

/// Bin-to-frequency convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinMapping {
    /// Standard DFT bin frequency: i × R / P
    #[default]
    Conventional,

    /// Half-scale mapping of earlier consumers: i × R / (2P)
    Legacy,
}

impl BinMapping {
    /// Spacing between adjacent bins in Hz
    ///
    /// # Arguments
    /// * `sample_rate` - Effective sample rate R in Hz
    /// * `padded_len` - Transform length P
    pub fn bin_width(&self, sample_rate: f64, padded_len: usize) -> f64 {
        let p = padded_len as f64;
        match self {
            BinMapping::Conventional => sample_rate / p,
            BinMapping::Legacy => sample_rate / (p * 2.0),
        }
    }

    /// Fractional bin index for a frequency in Hz (inverse of the mapping)
    pub fn frequency_to_bin(&self, frequency_hz: f64, sample_rate: f64, padded_len: usize) -> f64 {
        frequency_hz / self.bin_width(sample_rate, padded_len)
    }
}

/// Build the frequency axis for a magnitude spectrum
///
/// # Arguments
/// * `num_bins` - Magnitude spectrum length M (= P/2)
/// * `sample_rate` - Effective sample rate R in Hz
/// * `padded_len` - Transform length P
/// * `mapping` - Bin-to-frequency convention
pub fn frequency_axis(num_bins: usize, sample_rate: f64, padded_len: usize, mapping: BinMapping) -> Vec<f64> {
    let width = mapping.bin_width(sample_rate, padded_len);
    (0..num_bins).map(|i| i as f64 * width).collect()
}
