//! Removal of the fitted eccentricity from every reading.

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::offset::check_shape;
use crate::{AngleBasis, Offset, ProfileError, ScanTable};

/// Return a corrected copy of `table`:
/// `corrected[r][i] = table[r][i] + dx·cos[i] + dy·sin[i]`.
///
/// The input is left untouched. Applying this twice with a nonzero offset is
/// not a no-op; only re-estimating on corrected data converges to zero.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(table, basis), fields(rows = table.num_rows()))
)]
pub fn apply_correction(
    table: &ScanTable,
    basis: &AngleBasis,
    offset: Offset,
) -> Result<ScanTable, ProfileError> {
    check_shape(table, basis)?;

    let shift: Vec<f64> = basis
        .directions()
        .iter()
        .map(|dir| offset.projection(dir))
        .collect();

    let mut data = Vec::with_capacity(table.as_slice().len());
    for row in table.rows() {
        data.extend(row.iter().zip(&shift).map(|(value, s)| value + s));
    }
    Ok(ScanTable::from_raw(table.probe_count(), data))
}
