//! Recording buffer for 3-axis motion samples
//!
//! Holds the samples captured during one recording session, in
//! non-decreasing timestamp order.

use crate::error::AnalysisError;
use std::fmt;

/// Motion sensor axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in pipeline order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn name(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One motion reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub z: f64,

    /// Acquisition time in milliseconds since an arbitrary epoch
    pub timestamp_ms: u64,
}

impl Sample {
    pub fn new(x: f64, y: f64, z: f64, timestamp_ms: u64) -> Self {
        Self { x, y, z, timestamp_ms }
    }

    /// Get the reading for one axis
    pub fn component(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

/// Ordered samples from a single recording session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingBuffer {
    samples: Vec<Sample>,
}

impl RecordingBuffer {
    /// Create an empty buffer at recording start
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer sized for an expected number of samples
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Build a buffer from already-collected samples
    ///
    /// # Errors
    /// `UnorderedTimestamps` if any sample precedes the one before it
    pub fn from_samples(samples: Vec<Sample>) -> Result<Self, AnalysisError> {
        for (index, pair) in samples.windows(2).enumerate() {
            if pair[1].timestamp_ms < pair[0].timestamp_ms {
                return Err(AnalysisError::UnorderedTimestamps {
                    index: index + 1,
                    previous_ms: pair[0].timestamp_ms,
                    timestamp_ms: pair[1].timestamp_ms,
                });
            }
        }

        Ok(Self { samples })
    }

    /// Append a sample during recording
    ///
    /// # Errors
    /// `UnorderedTimestamps` if the sample is older than the last one appended;
    /// the buffer is left unchanged.
    pub fn push(&mut self, sample: Sample) -> Result<(), AnalysisError> {
        if let Some(last) = self.samples.last() {
            if sample.timestamp_ms < last.timestamp_ms {
                return Err(AnalysisError::UnorderedTimestamps {
                    index: self.samples.len(),
                    previous_ms: last.timestamp_ms,
                    timestamp_ms: sample.timestamp_ms,
                });
            }
        }

        self.samples.push(sample);
        Ok(())
    }

    /// Discard all samples before the next recording starts
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Time between first and last sample in milliseconds (0 for fewer than 2 samples)
    pub fn duration_ms(&self) -> u64 {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => last.timestamp_ms.saturating_sub(first.timestamp_ms),
            _ => 0,
        }
    }

    /// Time between first and last sample in seconds
    pub fn duration_secs(&self) -> f64 {
        self.duration_ms() as f64 / 1000.0
    }

    /// Extract one axis as a real-valued series
    pub fn axis_series(&self, axis: Axis) -> Vec<f64> {
        self.samples.iter().map(|s| s.component(axis)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_in_order() {
        let mut buffer = RecordingBuffer::new();
        buffer.push(Sample::new(0.1, 0.2, 0.3, 0)).unwrap();
        buffer.push(Sample::new(0.4, 0.5, 0.6, 10)).unwrap();
        buffer.push(Sample::new(0.7, 0.8, 0.9, 10)).unwrap();

        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.duration_ms(), 10);
        assert!((buffer.duration_secs() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_push_rejects_older_sample() {
        let mut buffer = RecordingBuffer::new();
        buffer.push(Sample::new(0.0, 0.0, 0.0, 50)).unwrap();

        let err = buffer.push(Sample::new(0.0, 0.0, 0.0, 40)).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::UnorderedTimestamps { index: 1, previous_ms: 50, timestamp_ms: 40 }
        );
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_from_samples_validates_order() {
        let samples = vec![
            Sample::new(0.0, 0.0, 0.0, 0),
            Sample::new(0.0, 0.0, 0.0, 20),
            Sample::new(0.0, 0.0, 0.0, 15),
        ];

        let err = RecordingBuffer::from_samples(samples).unwrap_err();
        assert!(matches!(err, AnalysisError::UnorderedTimestamps { index: 2, .. }));
    }

    #[test]
    fn test_axis_series() {
        let buffer = RecordingBuffer::from_samples(vec![
            Sample::new(1.0, 2.0, 3.0, 0),
            Sample::new(4.0, 5.0, 6.0, 10),
        ])
        .unwrap();

        assert_eq!(buffer.axis_series(Axis::X), vec![1.0, 4.0]);
        assert_eq!(buffer.axis_series(Axis::Y), vec![2.0, 5.0]);
        assert_eq!(buffer.axis_series(Axis::Z), vec![3.0, 6.0]);
    }

    #[test]
    fn test_clear_and_short_durations() {
        let mut buffer = RecordingBuffer::with_capacity(4);
        assert_eq!(buffer.duration_ms(), 0);

        buffer.push(Sample::new(0.0, 0.0, 0.0, 100)).unwrap();
        assert_eq!(buffer.duration_ms(), 0);

        buffer.clear();
        assert!(buffer.is_empty());
    }
}
