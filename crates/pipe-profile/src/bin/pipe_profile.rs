use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use pipe_profile::{correct_file, CorrectionReport, InstrumentConfig};

/// Remove probe-carrier eccentricity from a pipe profiler scan file.
#[derive(Debug, Parser)]
#[command(name = "pipe-profile", version, about)]
struct Cli {
    /// Scan file, one row of probe readings per line. Prompted for when omitted.
    input: Option<PathBuf>,

    /// JSON instrument configuration.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of probes (overrides the config).
    #[arg(long, value_name = "N")]
    probes: Option<usize>,

    /// Nominal bore diameter in mm (overrides the config).
    #[arg(long, value_name = "MM")]
    diameter: Option<f64>,

    /// Write the corrected table here instead of next to the input.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write a JSON run report.
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli)?;
    let input = match &cli.input {
        Some(path) => path.clone(),
        None => prompt_input_path()?,
    };

    let outcome = correct_file(&input, &config, cli.output.as_deref());

    if let Some(report_path) = &cli.report {
        let mut report = CorrectionReport::new(&input, &config.geometry());
        match &outcome {
            Ok(run) => run.record(&mut report),
            Err(err) => report.set_error(err),
        }
        report.write_json(report_path)?;
    }

    let run = outcome?;
    println!("Loaded {} rows × {} cols", run.rows, run.probe_count);
    println!("dx = {:.3} mm, dy = {:.3} mm", run.offset.dx, run.offset.dy);
    println!("\nSaved corrected file → {}", run.output.display());
    Ok(())
}

fn load_config(cli: &Cli) -> Result<InstrumentConfig, pipe_profile::ScanIoError> {
    let mut config = match &cli.config {
        Some(path) => InstrumentConfig::load_json(path)?,
        None => InstrumentConfig::default(),
    };
    if let Some(probes) = cli.probes {
        config.probe_count = probes;
    }
    if let Some(diameter) = cli.diameter {
        config.diameter_mm = diameter;
    }
    Ok(config)
}

fn prompt_input_path() -> io::Result<PathBuf> {
    let mut stdout = io::stdout();
    write!(stdout, "Enter input file path: ")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(Path::new(line.trim()).to_path_buf())
}

// RUST_LOG, when set, refines the level chosen by `-v`.
#[cfg(not(feature = "tracing"))]
fn init_logging(verbose: u8) {
    use log::LevelFilter;

    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .try_init();
}

// With tracing enabled the filter comes from RUST_LOG; `log` records are
// bridged by the subscriber.
#[cfg(feature = "tracing")]
fn init_logging(_verbose: u8) {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::Uptime::default())
        .finish()
        .try_init();
}
