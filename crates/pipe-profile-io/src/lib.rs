//! File-facing collaborators of `pipe-profile-core`.
//!
//! - whitespace-delimited scan tables in, significant-digit tables out,
//! - JSON instrument configuration,
//! - JSON run reports.

mod config;
mod error;
mod report;
mod text;

pub use config::InstrumentConfig;
pub use error::ScanIoError;
pub use report::CorrectionReport;
pub use text::{
    corrected_output_path, format_significant, load_scan_file, read_scan_table, save_scan_file,
    write_scan_table,
};
