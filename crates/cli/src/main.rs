//! # romdata-cli
//!
//! Regenerates `rom-data.json` for the web presentation from the ROM workbook.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use romdata_core::{build_document, write_document, RomError, RunReport, SourceLocator};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// update-rom-data - Refresh the ROM presentation data from Excel
#[derive(Parser)]
#[command(name = "update-rom-data")]
#[command(author, version, about = "Extract ROM figures from Excel into rom-data.json", long_about = None)]
struct Cli {
    /// ROM workbook to read (searched for when omitted)
    #[arg(value_name = "WORKBOOK")]
    workbook: Option<PathBuf>,

    /// Where to write the JSON document
    #[arg(short = 'o', long = "output", default_value = romdata_core::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }

    let locator = SourceLocator::from_current_dir();
    match run(&cli, &locator, Local::now().date_naive()) {
        Ok(report) => {
            print_report(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red().bold());
            if is_source_not_found(&e) {
                eprintln!("{}", Cli::command().render_usage());
            }
            ExitCode::FAILURE
        }
    }
}

/// Locate the workbook, extract it and write the document.
///
/// Nothing is written unless the whole document was built.
fn run(cli: &Cli, locator: &SourceLocator, today: NaiveDate) -> Result<RunReport> {
    let source = locator
        .locate(cli.workbook.as_deref())
        .ok_or_else(|| RomError::SourceNotFound {
            requested: cli.workbook.clone(),
        })?;

    debug!(source = %source.display(), output = %cli.output.display(), "resolved paths");
    println!("Reading ROM data from: {}", source.display());
    let document = build_document(&source, today)?;

    write_document(&document, &cli.output)
        .with_context(|| format!("Failed to save {}", cli.output.display()))?;
    println!(
        "{} Data saved to: {}",
        "✓".green().bold(),
        cli.output.display()
    );

    Ok(RunReport::new(&document, &source, &cli.output))
}

fn is_source_not_found(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<RomError>(),
        Some(RomError::SourceNotFound { .. })
    )
}

/// Print the closing summary.
fn print_report(report: &RunReport) {
    let rule = "=".repeat(50);
    println!("\n{rule}");
    println!("{}", "ROM Data Update Complete".cyan().bold());
    println!("{rule}");
    println!("{report}");
    println!(
        "\n{} Web presentation will reflect these values on next page load.",
        "✓".green().bold()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use tempfile::tempdir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 3).unwrap()
    }

    // ========================================================================
    // CLI argument parsing tests
    // ========================================================================

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["update-rom-data"]);
        assert!(cli.workbook.is_none());
        assert_eq!(cli.output, PathBuf::from("data/rom-data.json"));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parse_workbook() {
        let cli = Cli::parse_from(["update-rom-data", "../ROM.xlsx"]);
        assert_eq!(cli.workbook, Some(PathBuf::from("../ROM.xlsx")));
    }

    #[test]
    fn test_cli_parse_output_and_verbose() {
        let cli = Cli::parse_from(["update-rom-data", "-v", "-o", "out/rom.json", "ROM.xlsx"]);
        assert_eq!(cli.output, PathBuf::from("out/rom.json"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_rejects_extra_positional() {
        let result = Cli::try_parse_from(["update-rom-data", "a.xlsx", "b.xlsx"]);
        assert!(result.is_err());
    }

    // ========================================================================
    // Run tests
    // ========================================================================

    #[test]
    fn test_run_missing_explicit_workbook() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("data/rom-data.json");
        let cli = Cli::parse_from([
            "update-rom-data",
            "-o",
            output.to_str().unwrap(),
            dir.path().join("missing.xlsx").to_str().unwrap(),
        ]);

        let err = run(&cli, &SourceLocator::new(dir.path()), today()).unwrap_err();
        assert!(is_source_not_found(&err));
        assert!(err.to_string().contains("missing.xlsx"));
        assert!(!output.exists());
    }

    #[test]
    fn test_run_nothing_to_find() {
        let root = tempdir().unwrap();
        let work = root.path().join("web");
        std::fs::create_dir(&work).unwrap();
        let cli = Cli::parse_from(["update-rom-data", "-o", work.join("x.json").to_str().unwrap()]);

        let err = run(&cli, &SourceLocator::new(&work), today()).unwrap_err();
        assert!(is_source_not_found(&err));
    }

    #[test]
    fn test_run_writes_document_and_reports() {
        let root = tempdir().unwrap();
        let work = root.path().join("web");
        std::fs::create_dir(&work).unwrap();

        let mut workbook = Workbook::new();
        workbook.add_worksheet().set_name("Points").unwrap();
        workbook.save(root.path().join("Client_ROM.xlsx")).unwrap();

        let output = work.join("data/rom-data.json");
        let cli = Cli::parse_from(["update-rom-data", "-o", output.to_str().unwrap()]);

        let report = run(&cli, &SourceLocator::new(&work), today()).unwrap();
        assert!(output.exists());
        assert_eq!(report.last_updated, "2026-02-03");
        assert_eq!(report.investment_avg, 300_000);
        assert_eq!(report.payback_months, 5);
        assert_eq!(report.source.file_name().unwrap(), "Client_ROM.xlsx");
    }

    #[test]
    fn test_run_corrupt_workbook_is_not_a_lookup_failure() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("ROM.xlsx");
        std::fs::write(&source, b"garbage").unwrap();
        let output = dir.path().join("rom-data.json");
        let cli = Cli::parse_from([
            "update-rom-data",
            "-o",
            output.to_str().unwrap(),
            source.to_str().unwrap(),
        ]);

        let err = run(&cli, &SourceLocator::new(dir.path()), today()).unwrap_err();
        assert!(!is_source_not_found(&err));
        assert!(!output.exists());
    }
}
