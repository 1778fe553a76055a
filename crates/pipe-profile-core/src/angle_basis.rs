//! Unit-circle projections of evenly spaced probes.

use std::f64::consts::TAU;

use nalgebra::Vector2;

use crate::geometry::check_probe_count;
use crate::ProfileError;

/// Cosine/sine direction of every probe, probe 0 at angle 0.
///
/// Probe `i` of `N` sits at `2π·i/N`, counter-clockwise. The column order of
/// the scan data must follow the same enumeration.
#[derive(Clone, Debug, PartialEq)]
pub struct AngleBasis {
    directions: Vec<Vector2<f64>>,
}

impl AngleBasis {
    /// Build the basis for `probe_count` probes.
    ///
    /// Zero probes, or more than [`crate::MAX_PROBE_COUNT`], are rejected.
    pub fn new(probe_count: usize) -> Result<Self, ProfileError> {
        check_probe_count(probe_count)?;
        let n = probe_count as f64;
        let directions = (0..probe_count)
            .map(|i| {
                let angle = i as f64 * TAU / n;
                Vector2::new(angle.cos(), angle.sin())
            })
            .collect();
        Ok(Self { directions })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.directions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    /// `(cos, sin)` of probe `i`.
    #[inline]
    pub fn direction(&self, i: usize) -> Vector2<f64> {
        self.directions[i]
    }

    pub fn directions(&self) -> &[Vector2<f64>] {
        &self.directions
    }

    pub fn cos(&self) -> impl Iterator<Item = f64> + '_ {
        self.directions.iter().map(|d| d.x)
    }

    pub fn sin(&self) -> impl Iterator<Item = f64> + '_ {
        self.directions.iter().map(|d| d.y)
    }
}
