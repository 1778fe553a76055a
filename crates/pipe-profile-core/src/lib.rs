//! Eccentricity correction for circular multi-probe pipe profilers.
//!
//! A profiler carries `N` radial probes evenly spaced around its axis. When
//! the tool rides off the bore center by `(dx, dy)`, probe `i` at angle
//! `θᵢ = 2π·i/N` reads short by `dx·cos θᵢ + dy·sin θᵢ`. This crate fits that
//! offset over a whole scan table and adds the projection back.
//!
//! The fit treats the cosine and sine components as independent univariate
//! regressions. That is exact only for evenly spaced probes over the full
//! circle; irregular layouts need a joint solve, which is not provided.
//!
//! The crate is purely numerical and does no file I/O.

mod angle_basis;
mod correction;
mod error;
mod geometry;
mod offset;
mod pipeline;
mod table;

pub use angle_basis::AngleBasis;
pub use correction::apply_correction;
pub use error::{Axis, ProfileError};
pub use geometry::{InstrumentGeometry, MAX_PROBE_COUNT};
pub use offset::{estimate_offset, fit_sums, FitSums, Offset};
pub use pipeline::{CorrectionResult, ProfileCorrector};
pub use table::ScanTable;
