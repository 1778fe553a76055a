//! Facade crate for the `pipe-profile-*` workspace.
//!
//! This crate provides:
//! - re-exports of the numerical core and the file collaborators,
//! - [`correct_file`], which reads a scan file, removes the fitted
//!   eccentricity and writes the corrected sibling file.
//!
//! ## Quickstart
//!
//! ```no_run
//! use pipe_profile::{correct_file, InstrumentConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = InstrumentConfig::default();
//! let run = correct_file("scan.txt", &cfg, None)?;
//! println!("dx = {:.3} mm, dy = {:.3} mm", run.offset.dx, run.offset.dy);
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `pipe_profile::core`: angle basis, offset estimation, correction.
//! - `pipe_profile::io`: text tables, JSON config and reports.

pub use pipe_profile_core as core;
pub use pipe_profile_io as io;

pub use pipe_profile_core::{InstrumentGeometry, Offset, ProfileCorrector, ProfileError, ScanTable};
pub use pipe_profile_io::{CorrectionReport, InstrumentConfig, ScanIoError};

mod correct;

pub use correct::{correct_file, CorrectFileError, FileCorrection};
