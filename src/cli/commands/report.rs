//! Report command handler
//!
//! Loads a student records file and prints (or writes) the two-section roster report.

use roster::config::Config;
use roster::core::{
    parser::{load_roster, LoadError, ParseMode},
    pipeline::{default_report_path, render_roster, write_roster},
    report::ReportFormat,
};
use roster::{error, info, verbose};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command.
///
/// # Arguments
/// * `input_file` - Records file; falls back to config `paths.input_file`
/// * `output_file` - Optional output path; stdout when omitted
/// * `save` - Without `output_file`, write to `<input stem>_report.<ext>` beside the input
/// * `config` - Effective configuration (format, parse mode)
///
/// Exits with status 1 if the input cannot be opened or the report cannot be produced.
pub fn run(input_file: Option<&Path>, output_file: Option<&Path>, save: bool, config: &Config) {
    let input = input_file.map_or_else(|| PathBuf::from(&config.paths.input_file), Path::to_path_buf);

    if let Err(err) = generate_report(&input, output_file, save, config) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn resolve_format(config: &Config) -> Result<ReportFormat, String> {
    if config.report.format.is_empty() {
        return Ok(ReportFormat::default());
    }
    ReportFormat::from_str(&config.report.format).map_err(|e| format!("✗ {e}"))
}

fn generate_report(
    input: &Path,
    output_file: Option<&Path>,
    save: bool,
    config: &Config,
) -> Result<(), String> {
    let format = resolve_format(config)?;
    let mode = ParseMode::from_isolate(config.parser.isolate_records);

    let (mut roster, summary) = load_roster(input, mode).map_err(|e| {
        error!("{e}");
        match e {
            LoadError::Io { path, .. } => format!("Error: cannot open {}", path.display()),
        }
    })?;

    for record in &roster {
        verbose!("{}", record.describe().trim_end());
    }
    verbose!(
        "{} loaded, {} skipped, {} rejected",
        summary.loaded,
        summary.skipped,
        summary.rejected
    );

    let output_path = output_file
        .map(Path::to_path_buf)
        .or_else(|| save.then(|| default_report_path(input, format)));

    match output_path {
        Some(path) => {
            write_roster(&mut roster, format, &path).map_err(|e| {
                format!("✗ Failed to write {format} report to {}: {e}", path.display())
            })?;
            info!("Report written to: {}", path.display());
            println!("✓ Report generated: {}", path.display());
        }
        None => {
            let report = render_roster(&mut roster, format)
                .map_err(|e| format!("✗ Failed to render {format} report: {e}"))?;
            print!("{report}");
        }
    }

    Ok(())
}
