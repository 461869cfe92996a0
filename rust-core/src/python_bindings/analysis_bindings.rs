//! Python bindings for recording analysis

use pyo3::prelude::*;
use pyo3::exceptions::PyValueError;
use numpy::{PyArray1, PyReadonlyArray1};
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::recording::{Axis, RecordingBuffer, Sample};
use crate::spectrum::{BinMapping, SpectrumAnalyzer, WindowType};

/// Window type enum exposed to Python
#[pyclass(name = "WindowType")]
#[derive(Clone)]
pub enum PyWindowType {
    Hann,
    Hamming,
    Blackman,
    Rectangular,
}

impl From<PyWindowType> for WindowType {
    fn from(py_win: PyWindowType) -> Self {
        match py_win {
            PyWindowType::Hann => WindowType::Hann,
            PyWindowType::Hamming => WindowType::Hamming,
            PyWindowType::Blackman => WindowType::Blackman,
            PyWindowType::Rectangular => WindowType::Rectangular,
        }
    }
}

/// Bin mapping enum exposed to Python
#[pyclass(name = "BinMapping")]
#[derive(Clone)]
pub enum PyBinMapping {
    Conventional,
    Legacy,
}

impl From<PyBinMapping> for BinMapping {
    fn from(py_mapping: PyBinMapping) -> Self {
        match py_mapping {
            PyBinMapping::Conventional => BinMapping::Conventional,
            PyBinMapping::Legacy => BinMapping::Legacy,
        }
    }
}

fn to_py_err(err: AnalysisError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Vibration analyzer exposed to Python
#[pyclass(name = "VibrationAnalyzer")]
pub struct PyVibrationAnalyzer {
    analyzer: SpectrumAnalyzer,
}

#[pymethods]
impl PyVibrationAnalyzer {
    /// Create a new vibration analyzer
    ///
    /// Args:
    ///     top_k: Number of dominant frequencies per axis
    ///     min_samples: Minimum recording length
    ///     window_type: Window type for analysis
    ///     bin_mapping: Bin-to-frequency convention
    ///     apply_correction: Whether to apply amplitude correction for windowing
    #[new]
    #[pyo3(signature = (top_k=3, min_samples=4, window_type=PyWindowType::Hann, bin_mapping=PyBinMapping::Conventional, apply_correction=false))]
    fn new(
        top_k: usize,
        min_samples: usize,
        window_type: PyWindowType,
        bin_mapping: PyBinMapping,
        apply_correction: bool,
    ) -> PyResult<Self> {
        let config = AnalysisConfig {
            top_k,
            min_samples,
            window_type: window_type.into(),
            bin_mapping: bin_mapping.into(),
            apply_correction,
            parallel_axes: true,
        };

        let analyzer = SpectrumAnalyzer::new(config).map_err(to_py_err)?;
        Ok(Self { analyzer })
    }

    /// Analyze a completed recording
    ///
    /// Args:
    ///     timestamps_ms: Sample timestamps in milliseconds (non-decreasing)
    ///     x, y, z: Per-axis readings, same length as timestamps_ms
    ///
    /// Returns:
    ///     Dictionary with keys 'sample_rate_hz', 'padded_len' and one entry per
    ///     axis ('x', 'y', 'z') holding 'frequencies', 'magnitudes',
    ///     'dominant' (list of (frequency_hz, magnitude)) and 'issues'
    fn analyze(
        &self,
        py: Python<'_>,
        timestamps_ms: PyReadonlyArray1<u64>,
        x: PyReadonlyArray1<f64>,
        y: PyReadonlyArray1<f64>,
        z: PyReadonlyArray1<f64>,
    ) -> PyResult<PyObject> {
        let timestamps = timestamps_ms.as_slice()?;
        let (xs, ys, zs) = (x.as_slice()?, y.as_slice()?, z.as_slice()?);

        if xs.len() != timestamps.len() || ys.len() != timestamps.len() || zs.len() != timestamps.len() {
            return Err(PyErr::new::<PyValueError, _>(
                "timestamps_ms, x, y and z must have the same length",
            ));
        }

        let samples = timestamps
            .iter()
            .enumerate()
            .map(|(i, &t)| Sample::new(xs[i], ys[i], zs[i], t))
            .collect();
        let buffer = RecordingBuffer::from_samples(samples).map_err(to_py_err)?;
        let analysis = self.analyzer.analyze_recording(&buffer).map_err(to_py_err)?;

        let dict = pyo3::types::PyDict::new(py);
        dict.set_item("sample_rate_hz", analysis.summary.sample_rate_hz)?;
        dict.set_item("padded_len", analysis.padded_len)?;

        for axis in Axis::ALL {
            let spectrum = analysis.axis(axis);
            let entry = pyo3::types::PyDict::new(py);

            entry.set_item("frequencies", PyArray1::from_slice(py, &spectrum.frequencies))?;
            entry.set_item("magnitudes", PyArray1::from_slice(py, &spectrum.magnitudes))?;

            let dominant: Vec<(f64, f64)> = spectrum
                .dominant
                .iter()
                .map(|peak| (peak.frequency_hz, peak.magnitude))
                .collect();
            entry.set_item("dominant", dominant)?;

            let issues: Vec<String> = spectrum.issues.iter().map(ToString::to_string).collect();
            entry.set_item("issues", issues)?;

            dict.set_item(axis.name(), entry)?;
        }

        Ok(dict.into())
    }

    /// Get configured number of dominant frequencies
    fn get_top_k(&self) -> usize {
        self.analyzer.config().top_k
    }

    /// Get configured minimum sample count
    fn get_min_samples(&self) -> usize {
        self.analyzer.config().min_samples
    }
}
