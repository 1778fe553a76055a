use log::info;

use crate::{
    apply_correction, estimate_offset, AngleBasis, InstrumentGeometry, Offset, ProfileError,
    ScanTable,
};

/// Outcome of a full estimate + correct pass.
#[derive(Clone, Debug, PartialEq)]
pub struct CorrectionResult {
    pub offset: Offset,
    pub corrected: ScanTable,
}

/// Eccentricity corrector for one instrument geometry.
///
/// The angle basis is computed once and shared by estimation and
/// correction, so both always agree on the probe enumeration.
#[derive(Clone, Debug)]
pub struct ProfileCorrector {
    geometry: InstrumentGeometry,
    basis: AngleBasis,
}

impl ProfileCorrector {
    pub fn new(geometry: InstrumentGeometry) -> Result<Self, ProfileError> {
        geometry.validate()?;
        let basis = AngleBasis::new(geometry.probe_count)?;
        Ok(Self { geometry, basis })
    }

    pub fn geometry(&self) -> &InstrumentGeometry {
        &self.geometry
    }

    pub fn basis(&self) -> &AngleBasis {
        &self.basis
    }

    pub fn estimate(&self, table: &ScanTable) -> Result<Offset, ProfileError> {
        estimate_offset(table, &self.basis, self.geometry.nominal_radius())
    }

    pub fn correct(&self, table: &ScanTable, offset: Offset) -> Result<ScanTable, ProfileError> {
        apply_correction(table, &self.basis, offset)
    }

    /// Estimate the offset of `table` and return the corrected copy.
    pub fn run(&self, table: &ScanTable) -> Result<CorrectionResult, ProfileError> {
        let offset = self.estimate(table)?;
        info!(
            "estimated offset dx={:.6} dy={:.6} over {} rows",
            offset.dx,
            offset.dy,
            table.num_rows()
        );
        let corrected = self.correct(table, offset)?;
        Ok(CorrectionResult { offset, corrected })
    }
}
