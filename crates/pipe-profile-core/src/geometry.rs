use serde::{Deserialize, Serialize};

use crate::ProfileError;

/// Largest probe count accepted for an instrument.
pub const MAX_PROBE_COUNT: usize = 65_536;

pub(crate) fn check_probe_count(probe_count: usize) -> Result<(), ProfileError> {
    if probe_count == 0 || probe_count > MAX_PROBE_COUNT {
        return Err(ProfileError::InvalidProbeCount { probe_count });
    }
    Ok(())
}

/// Fixed probe layout of a profiling instrument.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InstrumentGeometry {
    /// Number of evenly spaced radial probes.
    pub probe_count: usize,
    /// Nominal bore diameter, in the units of the readings.
    pub diameter: f64,
}

impl Default for InstrumentGeometry {
    fn default() -> Self {
        Self {
            probe_count: 40,
            diameter: 254.0,
        }
    }
}

impl InstrumentGeometry {
    pub fn new(probe_count: usize, diameter: f64) -> Self {
        Self {
            probe_count,
            diameter,
        }
    }

    /// Expected reading of a perfectly centered probe.
    #[inline]
    pub fn nominal_radius(&self) -> f64 {
        self.diameter / 2.0
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        check_probe_count(self.probe_count)?;
        if !self.diameter.is_finite() || self.diameter <= 0.0 {
            return Err(ProfileError::InvalidGeometry {
                diameter: self.diameter,
            });
        }
        Ok(())
    }
}
