#![forbid(unsafe_code)]

//! Colorcount binary entrypoint
//!
//! Parses the command line and runs the per-file scan/report loop. A
//! missing input path aborts the whole run; a file that fails to decode is
//! reported on stderr and skipped.

use clap::Parser;
use colorcount::cli::{Cli, OutputFormat};
use colorcount::engine::{self, ScanOptions};
use colorcount::output::{HumanFormatter, JsonlFormatter, human};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Errors that abort the whole run
#[derive(Debug, Error)]
enum FatalError {
    /// An input path argument does not refer to an existing file
    #[error("file {} does not exist", .0.display())]
    MissingInput(PathBuf),

    /// Stdout went away mid-report
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let stdout_color = cli.color.to_termcolor(std::io::stdout().is_terminal());
    let stderr_color = cli.color.to_termcolor(std::io::stderr().is_terminal());

    match run(&cli, stdout_color, stderr_color) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = human::write_diagnostic(stderr_color, &err.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(
    cli: &Cli,
    stdout_color: termcolor::ColorChoice,
    stderr_color: termcolor::ColorChoice,
) -> Result<(), FatalError> {
    let options = ScanOptions {
        include_transparency: cli.include_transparency,
    };
    let formatter = HumanFormatter::new(stdout_color, cli.verbose);
    let jsonl = JsonlFormatter::new(cli.verbose);

    let mut files_scanned = 0u64;
    let mut files_failed = 0u64;
    let mut printed_any = false;

    for path in &cli.inputs {
        if !path.exists() {
            return Err(FatalError::MissingInput(path.clone()));
        }

        match engine::scan_file(path, options) {
            Ok(scan) => {
                files_scanned += 1;
                match cli.format {
                    OutputFormat::Human => {
                        // Blank separator between blocks, never before the first
                        if printed_any {
                            println!();
                        }
                        formatter.write_to_stdout(&scan)?;
                        printed_any = true;
                    }
                    OutputFormat::Jsonl => print!("{}", jsonl.format_file(&scan)),
                }
            }
            Err(err) => {
                files_failed += 1;
                let _ = human::write_diagnostic(stderr_color, &err.to_string());
            }
        }
    }

    if cli.format == OutputFormat::Jsonl {
        print!("{}", jsonl.format_status(files_scanned, files_failed));
    }

    Ok(())
}
