use std::{
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use pipe_profile_core::{FitSums, InstrumentGeometry, Offset};
use serde::{Deserialize, Serialize};

use crate::ScanIoError;

/// Machine-readable summary of one correction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionReport {
    pub input_path: String,
    #[serde(default)]
    pub output_path: Option<String>,
    pub probe_count: usize,
    pub nominal_radius: f64,
    #[serde(default)]
    pub rows: usize,
    #[serde(default)]
    pub offset: Option<Offset>,
    #[serde(default)]
    pub fit: Option<FitSums>,
    #[serde(default)]
    pub error: Option<String>,
}

impl CorrectionReport {
    pub fn new(input_path: &Path, geometry: &InstrumentGeometry) -> Self {
        Self {
            input_path: input_path.to_string_lossy().into_owned(),
            output_path: None,
            probe_count: geometry.probe_count,
            nominal_radius: geometry.nominal_radius(),
            rows: 0,
            offset: None,
            fit: None,
            error: None,
        }
    }

    /// Populate report fields from a successful run.
    pub fn set_result(&mut self, rows: usize, offset: Offset, fit: FitSums, output: &Path) {
        self.rows = rows;
        self.offset = Some(offset);
        self.fit = Some(fit);
        self.output_path = Some(output.to_string_lossy().into_owned());
        self.error = None;
    }

    /// Record a failed run.
    pub fn set_error(&mut self, err: &impl Display) {
        self.error = Some(err.to_string());
    }

    pub fn output_path(&self) -> Option<PathBuf> {
        self.output_path.as_ref().map(PathBuf::from)
    }

    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ScanIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ScanIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
