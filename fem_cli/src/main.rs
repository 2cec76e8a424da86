//! # Fixed-End Moment CLI
//!
//! Terminal front end for `fem_core`. With no arguments it runs the
//! demonstration case (10 kN at midspan of a 6 m fixed-fixed beam).
//!
//! ```text
//! fem                                   # demo case
//! fem --load 10 --span 6 --position 2   # one case
//! fem --file cases.json --json          # batch, JSON output
//! ```
//!
//! Logging goes through `env_logger`; set `RUST_LOG` or pass `--verbose`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use fem_core::calculations::{calculate, FixedEndMomentInput, FixedEndMomentResult};
use fem_core::file_io::{load_case_file, CaseFile};
use fem_core::report::render_all;
use fem_core::{CalcError, ReportSettings, UnitSystem};

const DEMO_LOAD: f64 = 10.0;
const DEMO_SPAN: f64 = 6.0;

#[derive(Parser, Debug)]
#[command(name = "fem")]
#[command(about = "Fixed-end moments of a fixed-fixed beam under a point load")]
struct Cli {
    /// Point load magnitude P (positive downward)
    #[arg(short = 'p', long, default_value_t = DEMO_LOAD, allow_negative_numbers = true)]
    load: f64,

    /// Span length L
    #[arg(short = 'l', long, default_value_t = DEMO_SPAN, allow_negative_numbers = true)]
    span: f64,

    /// Distance a from support A to the load [default: L/2]
    #[arg(short = 'a', long, allow_negative_numbers = true)]
    position: Option<f64>,

    /// Label printed with the result
    #[arg(long, default_value = "")]
    label: String,

    /// Read cases from a JSON case file instead of the arguments above
    #[arg(short, long, conflicts_with_all = ["load", "span", "position", "label"])]
    file: Option<PathBuf>,

    /// Unit labels: metric or imperial
    #[arg(short, long)]
    units: Option<UnitSystem>,

    /// Decimal places for moments
    #[arg(short, long)]
    decimals: Option<usize>,

    /// List the equations used
    #[arg(long)]
    equations: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Cases and settings to run, file settings first then argument overrides.
    fn job(&self) -> Result<CaseFile, CalcError> {
        let mut job = match &self.file {
            Some(path) => load_case_file(path)?,
            None => {
                let position = self.position.unwrap_or(self.span / 2.0);
                CaseFile::default().with_case(FixedEndMomentInput::new(
                    self.label.clone(),
                    self.load,
                    self.span,
                    position,
                ))
            }
        };

        apply_overrides(&mut job.settings, self);
        Ok(job)
    }
}

fn apply_overrides(settings: &mut ReportSettings, cli: &Cli) {
    if let Some(units) = cli.units {
        settings.units = units;
    }
    if let Some(decimals) = cli.decimals {
        settings.decimals = decimals;
    }
    if cli.equations {
        settings.show_equations = true;
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
}

/// Exit status: 1 for rejected geometry, 2 for case-file problems.
fn exit_code_for(e: &CalcError) -> u8 {
    if e.is_validation() {
        1
    } else {
        2
    }
}

/// A case file always yields a JSON array, a single case a bare object.
fn render_json(results: &[FixedEndMomentResult], batch: bool) -> serde_json::Result<String> {
    match results {
        [only] if !batch => serde_json::to_string_pretty(only),
        _ => serde_json::to_string_pretty(results),
    }
}

fn report_error(label: &str, e: &CalcError) {
    if label.is_empty() {
        eprintln!("Error: {}", e);
    } else {
        eprintln!("Error in '{}': {}", label, e);
    }
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("{:?}", cli);

    let job = match cli.job() {
        Ok(job) => job,
        Err(e) => {
            report_error("", &e);
            return ExitCode::from(exit_code_for(&e));
        }
    };

    let mut results: Vec<FixedEndMomentResult> = Vec::with_capacity(job.cases.len());
    let mut status: u8 = 0;

    for case in &job.cases {
        match calculate(case) {
            Ok(result) => results.push(result),
            Err(e) => {
                debug!("case '{}' rejected: {}", case.label, e.error_code());
                status = status.max(exit_code_for(&e));
                report_error(&case.label, &e);
            }
        }
    }

    if cli.json {
        match render_json(&results, cli.file.is_some()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else if !results.is_empty() {
        print!("{}", render_all(&results, &job.settings));
    }

    ExitCode::from(status)
}
