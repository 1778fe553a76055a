use std::path::{Path, PathBuf};

use log::info;
use pipe_profile_core::{fit_sums, FitSums, Offset, ProfileCorrector, ProfileError, ScanTable};
use pipe_profile_io::{
    corrected_output_path, load_scan_file, save_scan_file, CorrectionReport, InstrumentConfig,
    ScanIoError,
};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced by [`correct_file`].
#[derive(thiserror::Error, Debug)]
pub enum CorrectFileError {
    #[error(transparent)]
    Io(#[from] ScanIoError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
}

/// Summary of a corrected file.
#[derive(Clone, Debug)]
pub struct FileCorrection {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    pub probe_count: usize,
    pub offset: Offset,
    pub fit: FitSums,
}

impl FileCorrection {
    /// Fill a report with this run's outcome.
    pub fn record(&self, report: &mut CorrectionReport) {
        report.set_result(self.rows, self.offset, self.fit, &self.output);
    }
}

/// Read `input`, remove the fitted eccentricity and write the corrected table.
///
/// The output goes to `output` when given, otherwise next to the input as
/// `<stem><output_suffix>`. Nothing is written unless the fit succeeds.
#[cfg_attr(feature = "tracing", instrument(level = "info", skip_all))]
pub fn correct_file(
    input: impl AsRef<Path>,
    config: &InstrumentConfig,
    output: Option<&Path>,
) -> Result<FileCorrection, CorrectFileError> {
    let input = input.as_ref();
    let corrector = ProfileCorrector::new(config.geometry())?;
    let table = load_scan_file(input, config.probe_count)?;
    info!(
        "loaded {} rows × {} cols from {}",
        table.num_rows(),
        table.probe_count(),
        input.display()
    );

    let (fit, offset, corrected) = fit_and_correct(&corrector, &table)?;

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| corrected_output_path(input, &config.output_suffix));
    save_scan_file(&output, &corrected, config.significant_digits)?;
    info!("wrote {}", output.display());

    Ok(FileCorrection {
        input: input.to_path_buf(),
        output,
        rows: table.num_rows(),
        probe_count: table.probe_count(),
        offset,
        fit,
    })
}

fn fit_and_correct(
    corrector: &ProfileCorrector,
    table: &ScanTable,
) -> Result<(FitSums, Offset, ScanTable), ProfileError> {
    let fit = fit_sums(
        table,
        corrector.basis(),
        corrector.geometry().nominal_radius(),
    )?;
    let offset = fit.solve()?;
    let corrected = corrector.correct(table, offset)?;
    Ok((fit, offset, corrected))
}
