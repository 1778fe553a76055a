//! Whitespace-delimited scan tables.
//!
//! Input is one scan row per line with values separated by any whitespace.
//! Numbers always use `.` as the decimal separator. A blank line is a row with
//! no values and fails the width check like any other short row.
//! Output joins values with single spaces, each rounded to a fixed number of
//! significant digits.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use pipe_profile_core::ScanTable;

use crate::ScanIoError;

/// Parse a scan table with exactly `probe_count` values on every line.
pub fn read_scan_table<R: BufRead>(
    reader: R,
    probe_count: usize,
) -> Result<ScanTable, ScanIoError> {
    let mut table = ScanTable::new(probe_count)?;
    let mut row = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        row.clear();
        for token in line.split_whitespace() {
            row.push(parse_value(token, idx + 1)?);
        }
        table.push_row(&row)?;
    }
    Ok(table)
}

fn parse_value(token: &str, line: usize) -> Result<f64, ScanIoError> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ScanIoError::Parse {
            line,
            token: token.to_string(),
        }),
    }
}

/// Read a scan file, reporting a missing path as [`ScanIoError::NotFound`].
pub fn load_scan_file(
    path: impl AsRef<Path>,
    probe_count: usize,
) -> Result<ScanTable, ScanIoError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ScanIoError::NotFound(path.to_path_buf()));
    }
    let table = read_scan_table(BufReader::new(File::open(path)?), probe_count)?;
    debug!("read {} rows from {}", table.num_rows(), path.display());
    Ok(table)
}

/// Write `table` one row per line with `digits` significant digits.
pub fn write_scan_table<W: Write>(
    mut writer: W,
    table: &ScanTable,
    digits: usize,
) -> Result<(), ScanIoError> {
    let mut line = String::new();
    for row in table.rows() {
        line.clear();
        for (i, v) in row.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(&format_significant(*v, digits));
        }
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_scan_file(
    path: impl AsRef<Path>,
    table: &ScanTable,
    digits: usize,
) -> Result<(), ScanIoError> {
    let file = File::create(path.as_ref())?;
    write_scan_table(BufWriter::new(file), table, digits)
}

/// Sibling of `input` named `<stem><suffix>`.
pub fn corrected_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let name = format!("{stem}{suffix}");
    match input.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

/// General numeric format with `digits` significant digits.
///
/// Fixed notation is used while the decimal exponent lies in `[-5, digits)`,
/// otherwise `d.dddE+XX`. Trailing zeros are dropped in both forms, so
/// `127.0` prints as `127` and `123456.0` with five digits as `1.2346E+05`.
pub fn format_significant(value: f64, digits: usize) -> String {
    let digits = digits.max(1);
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // Round first: the exponent must be the one of the rounded value.
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exponent < -5 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}E{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
