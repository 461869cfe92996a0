//! Recorded motion samples and sample-rate estimation

pub mod buffer;
pub mod summary;

pub use buffer::{Axis, RecordingBuffer, Sample};
pub use summary::{summarize, RecordingSummary};
