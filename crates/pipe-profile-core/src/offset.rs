//! Per-axis least-squares estimate of the instrument eccentricity.
//!
//! Each reading is modelled as
//!
//! ```text
//! row[i] - r_nominal ≈ -dx·cos[i] - dy·sin[i]
//! ```
//!
//! and the two slopes are fitted as independent univariate regressions:
//! `a = Σ cos·diff / Σ cos²`, `b = Σ sin·diff / Σ sin²`, offset `(-a, -b)`.
//!
//! This is *not* the joint 2×2 least-squares solve. The cross term
//! `Σ cos·sin` vanishes only for evenly spaced probes covering the full
//! circle; for irregular layouts the independent fit is biased.

use log::debug;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{AngleBasis, Axis, ProfileError, ScanTable};

/// Axis energy below this (per row) is treated as a zero denominator.
const MIN_AXIS_ENERGY_PER_ROW: f64 = 1e-12;

/// Estimated displacement of the instrument center from the bore center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn as_vector(&self) -> Vector2<f64> {
        Vector2::new(self.dx, self.dy)
    }

    pub fn magnitude(&self) -> f64 {
        self.as_vector().norm()
    }

    /// Radial bias this offset removes at a probe with direction `dir`.
    #[inline]
    pub fn projection(&self, dir: &Vector2<f64>) -> f64 {
        self.as_vector().dot(dir)
    }
}

/// Accumulated regression sums over every row and probe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FitSums {
    /// `Σ cos[i]·diff`
    pub scy: f64,
    /// `Σ sin[i]·diff`
    pub ssy: f64,
    /// `Σ cos[i]²`
    pub scc: f64,
    /// `Σ sin[i]²`
    pub sss: f64,
    /// Number of rows that contributed.
    pub rows: usize,
}

impl FitSums {
    /// Solve both axes, refusing zero (or vanishing) denominators.
    pub fn solve(&self) -> Result<Offset, ProfileError> {
        let min_energy = MIN_AXIS_ENERGY_PER_ROW * self.rows.max(1) as f64;
        if self.scc <= min_energy {
            return Err(ProfileError::DegenerateFit { axis: Axis::X });
        }
        if self.sss <= min_energy {
            return Err(ProfileError::DegenerateFit { axis: Axis::Y });
        }
        let a = self.scy / self.scc;
        let b = self.ssy / self.sss;
        Ok(Offset::new(-a, -b))
    }
}

/// Accumulate the regression sums for `table` against `basis`.
///
/// Rows and probes are summed in storage order, so results are bit-identical
/// for identical input.
pub fn fit_sums(
    table: &ScanTable,
    basis: &AngleBasis,
    nominal_radius: f64,
) -> Result<FitSums, ProfileError> {
    check_shape(table, basis)?;
    if table.is_empty() {
        return Err(ProfileError::EmptyInput);
    }

    let mut cross = Vector2::<f64>::zeros();
    let mut energy = Vector2::<f64>::zeros();
    for row in table.rows() {
        for (value, dir) in row.iter().zip(basis.directions()) {
            let diff = value - nominal_radius;
            cross += dir * diff;
            energy += dir.component_mul(dir);
        }
    }

    Ok(FitSums {
        scy: cross.x,
        ssy: cross.y,
        scc: energy.x,
        sss: energy.y,
        rows: table.num_rows(),
    })
}

/// Estimate the single offset that best explains every row of `table`.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "info",
        skip(table, basis),
        fields(rows = table.num_rows(), probes = basis.len())
    )
)]
pub fn estimate_offset(
    table: &ScanTable,
    basis: &AngleBasis,
    nominal_radius: f64,
) -> Result<Offset, ProfileError> {
    let sums = fit_sums(table, basis, nominal_radius)?;
    debug!(
        "fit sums: scy={:.6} ssy={:.6} scc={:.3} sss={:.3} rows={}",
        sums.scy, sums.ssy, sums.scc, sums.sss, sums.rows
    );
    sums.solve()
}

pub(crate) fn check_shape(table: &ScanTable, basis: &AngleBasis) -> Result<(), ProfileError> {
    if table.probe_count() != basis.len() {
        return Err(ProfileError::ShapeMismatch {
            row: 0,
            expected: basis.len(),
            got: table.probe_count(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Readings of an instrument displaced by `offset`: `r - dx·cos - dy·sin`.
    fn eccentric_table(basis: &AngleBasis, radius: f64, offset: Offset, rows: usize) -> ScanTable {
        let row: Vec<f64> = basis
            .directions()
            .iter()
            .map(|d| radius - offset.projection(d))
            .collect();
        ScanTable::from_rows(basis.len(), std::iter::repeat(row).take(rows)).expect("table")
    }

    #[test]
    fn four_probe_pure_x_eccentricity() {
        let basis = AngleBasis::new(4).unwrap();
        let table = ScanTable::from_rows(4, [[102.0, 100.0, 98.0, 100.0]]).unwrap();

        let sums = fit_sums(&table, &basis, 100.0).unwrap();
        assert_abs_diff_eq!(sums.scy, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sums.scc, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sums.ssy, 0.0, epsilon = 1e-12);

        let offset = estimate_offset(&table, &basis, 100.0).unwrap();
        assert_abs_diff_eq!(offset.dx, -2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(offset.dy, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn nominal_readings_give_zero_offset() {
        let basis = AngleBasis::new(40).unwrap();
        let table = eccentric_table(&basis, 127.0, Offset::ZERO, 5);
        let offset = estimate_offset(&table, &basis, 127.0).unwrap();
        assert_abs_diff_eq!(offset.dx, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(offset.dy, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn synthetic_eccentricity_is_recovered() {
        let basis = AngleBasis::new(40).unwrap();
        for rows in [1, 3, 250] {
            let table = eccentric_table(&basis, 127.0, Offset::new(1.25, -0.4), rows);
            let offset = estimate_offset(&table, &basis, 127.0).unwrap();
            assert_abs_diff_eq!(offset.dx, 1.25, epsilon = 1e-9);
            assert_abs_diff_eq!(offset.dy, -0.4, epsilon = 1e-9);
        }
    }

    #[test]
    fn slopes_are_reported_as_the_opposite_displacement() {
        // r + tx·cos + ty·sin fits slopes (tx, ty), reported as (-tx, -ty).
        let basis = AngleBasis::new(12).unwrap();
        let row: Vec<f64> = basis
            .directions()
            .iter()
            .map(|d| 80.0 + 0.3 * d.x + 0.7 * d.y)
            .collect();
        let table = ScanTable::from_rows(12, [row]).unwrap();
        let offset = estimate_offset(&table, &basis, 80.0).unwrap();
        assert_abs_diff_eq!(offset.dx, -0.3, epsilon = 1e-9);
        assert_abs_diff_eq!(offset.dy, -0.7, epsilon = 1e-9);
    }

    #[test]
    fn row_order_does_not_change_the_estimate() {
        let basis = AngleBasis::new(8).unwrap();
        let rows: Vec<Vec<f64>> = (0..6)
            .map(|r| (0..8).map(|i| 50.0 + ((r * 8 + i) % 7) as f64 * 0.1).collect())
            .collect();
        let forward = ScanTable::from_rows(8, rows.iter()).unwrap();
        let reversed = ScanTable::from_rows(8, rows.iter().rev()).unwrap();

        let a = estimate_offset(&forward, &basis, 50.0).unwrap();
        let b = estimate_offset(&reversed, &basis, 50.0).unwrap();
        assert_abs_diff_eq!(a.dx, b.dx, epsilon = 1e-12);
        assert_abs_diff_eq!(a.dy, b.dy, epsilon = 1e-12);
    }

    #[test]
    fn empty_table_is_rejected() {
        let basis = AngleBasis::new(40).unwrap();
        let table = ScanTable::new(40).unwrap();
        assert_eq!(
            estimate_offset(&table, &basis, 127.0),
            Err(ProfileError::EmptyInput)
        );
    }

    #[test]
    fn basis_width_mismatch_is_rejected() {
        let basis = AngleBasis::new(40).unwrap();
        let table = ScanTable::from_rows(4, [[1.0, 2.0, 3.0, 4.0]]).unwrap();
        assert!(matches!(
            estimate_offset(&table, &basis, 1.0),
            Err(ProfileError::ShapeMismatch {
                expected: 40,
                got: 4,
                ..
            })
        ));
    }

    #[test]
    fn single_probe_has_no_sine_energy() {
        let basis = AngleBasis::new(1).unwrap();
        let table = ScanTable::from_rows(1, [[10.0], [11.0]]).unwrap();
        assert_eq!(
            estimate_offset(&table, &basis, 10.0),
            Err(ProfileError::DegenerateFit { axis: Axis::Y })
        );
    }

    #[test]
    fn two_probes_are_degenerate_not_infinite() {
        // sin(π) is ~1e-16, so Σ sin² is nonzero but meaningless.
        let basis = AngleBasis::new(2).unwrap();
        let table = ScanTable::from_rows(2, [[10.5, 9.5]]).unwrap();
        assert_eq!(
            estimate_offset(&table, &basis, 10.0),
            Err(ProfileError::DegenerateFit { axis: Axis::Y })
        );
    }
}
