//! Zero-padding to a power-of-two length
//!
//! The padded sequence is what gets windowed, so padding always comes first.

/// Next power of two >= `len` (1 for an empty sequence)
pub fn padded_length(len: usize) -> usize {
    len.next_power_of_two()
}

/// Extend a signal with trailing zeros up to `padded_length(signal.len())`
pub fn zero_pad(signal: &[f64]) -> Vec<f64> {
    let mut padded = Vec::with_capacity(padded_length(signal.len()));
    padded.extend_from_slice(signal);
    padded.resize(padded_length(signal.len()), 0.0);
    padded
}
