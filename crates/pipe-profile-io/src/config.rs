//! JSON instrument configuration.

use std::{fs, path::Path};

use pipe_profile_core::InstrumentGeometry;
use serde::{Deserialize, Serialize};

use crate::ScanIoError;

fn default_probe_count() -> usize {
    40
}

fn default_diameter_mm() -> f64 {
    254.0
}

fn default_output_suffix() -> String {
    "_corrected.csv".to_string()
}

fn default_significant_digits() -> usize {
    5
}

/// Instrument and output settings; every field may be omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentConfig {
    #[serde(default = "default_probe_count")]
    pub probe_count: usize,
    #[serde(default = "default_diameter_mm")]
    pub diameter_mm: f64,
    /// Appended to the input file stem to name the corrected file.
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,
    /// Significant digits written per value.
    #[serde(default = "default_significant_digits")]
    pub significant_digits: usize,
}

impl Default for InstrumentConfig {
    fn default() -> Self {
        Self {
            probe_count: default_probe_count(),
            diameter_mm: default_diameter_mm(),
            output_suffix: default_output_suffix(),
            significant_digits: default_significant_digits(),
        }
    }
}

impl InstrumentConfig {
    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ScanIoError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ScanIoError::NotFound(path.to_path_buf()));
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ScanIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn geometry(&self) -> InstrumentGeometry {
        InstrumentGeometry::new(self.probe_count, self.diameter_mm)
    }
}
