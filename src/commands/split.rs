use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::cli::{Cli, SplitArgs};
use crate::config::{Config, validate_config};
use crate::output::{
    ColorMode, ErrorOutput, FileFailure, FileOutcome, FileReport, JsonFormatter, OutputFormat,
    ReportFormatter, RunReport, ScanProgress, TextFormatter,
};
use crate::scanner::{DirectoryScanner, GlobFilter, expand_paths};
use crate::splitter::{SplitOutput, StatementSplitter, Unterminated};
use crate::{CypherModuleError, EXIT_CONFIG_ERROR, EXIT_FILE_ERROR, EXIT_SUCCESS, Result};

use super::{load_config, write_output};

/// File size threshold for streaming reads (10 MB)
const LARGE_FILE_THRESHOLD: u64 = 10 * 1024 * 1024;

#[must_use]
pub fn run_split(args: &SplitArgs, cli: &Cli) -> i32 {
    let errors = ErrorOutput::new(cli.color.into());
    match run_split_impl(args, cli, &errors) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            errors.print(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Splits every requested module and writes the report.
///
/// Unreadable files are reported and skipped; the exit code is
/// [`EXIT_FILE_ERROR`] if any file failed. With `--fail-fast` the first
/// failure ends the run before any report is written.
///
/// # Errors
/// Returns an error for configuration problems, invalid exclude patterns,
/// or when the report cannot be formatted or written.
pub fn run_split_impl(args: &SplitArgs, cli: &Cli, errors: &ErrorOutput) -> Result<i32> {
    // 1. Load configuration and apply CLI overrides
    let mut config = load_config(args.config.as_deref(), cli.no_config)?.config;
    apply_cli_overrides(&mut config, args);
    validate_config(&config)?;

    // 2. Resolve the files to process
    let files = discover_files(&args.paths, &config)?;
    if files.is_empty() && !cli.quiet {
        errors.print_warning("No module files found", None);
    }

    // 3. Split each file
    let splitter = StatementSplitter::new(config.split.options());
    let outcomes = if args.fail_fast {
        match split_until_failure(&files, &splitter) {
            Ok(outcomes) => outcomes,
            Err(failure) => {
                errors.print(&failure.error);
                return Ok(EXIT_FILE_ERROR);
            }
        }
    } else {
        split_all(&files, &splitter, cli.quiet)
    };
    let report = RunReport::new(outcomes);

    // 4. Diagnostics on stderr
    print_diagnostics(&report, errors, cli.quiet);

    // 5. Format and write the report
    let output = format_report(args, &report, cli)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    if report.has_failures() {
        Ok(EXIT_FILE_ERROR)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn apply_cli_overrides(config: &mut Config, args: &SplitArgs) {
    if let Some(ext) = &args.ext {
        config.scanner.extensions.clone_from(ext);
    }

    config.scanner.exclude.extend(args.exclude.iter().cloned());

    if args.respect_quotes {
        config.split.respect_quotes = true;
    }

    if args.no_gitignore {
        config.scanner.gitignore = false;
    }
}

fn discover_files(paths: &[PathBuf], config: &Config) -> Result<Vec<PathBuf>> {
    let filter = GlobFilter::new(config.scanner.extensions.clone(), &config.scanner.exclude)?;
    let scanner = DirectoryScanner::with_gitignore(filter, config.scanner.gitignore);
    expand_paths(paths, &scanner)
}

/// Split files in parallel; outcomes stay in input order.
fn split_all(files: &[PathBuf], splitter: &StatementSplitter, quiet: bool) -> Vec<FileOutcome> {
    let total = u64::try_from(files.len()).unwrap_or(u64::MAX);
    let progress = ScanProgress::new(total, quiet);

    let outcomes = files
        .par_iter()
        .map(|path| {
            let outcome = process_file(path, splitter);
            progress.inc();
            outcome
        })
        .collect();

    progress.finish();
    outcomes
}

fn split_until_failure(
    files: &[PathBuf],
    splitter: &StatementSplitter,
) -> std::result::Result<Vec<FileOutcome>, FileFailure> {
    files
        .iter()
        .map(|path| match process_file(path, splitter) {
            FileOutcome::Failed(failure) => Err(failure),
            outcome @ FileOutcome::Split(_) => Ok(outcome),
        })
        .collect()
}

fn process_file(path: &Path, splitter: &StatementSplitter) -> FileOutcome {
    match read_and_split(path, splitter) {
        Ok(output) => FileOutcome::Split(FileReport {
            path: path.to_path_buf(),
            output,
        }),
        Err(error) => FileOutcome::Failed(FileFailure {
            path: path.to_path_buf(),
            error,
        }),
    }
}

/// Read one module and split it, streaming files of 10 MB and more.
///
/// # Errors
/// Returns [`CypherModuleError::FileAccess`] if the file cannot be opened or
/// read, or is not valid UTF-8.
pub fn read_and_split(path: &Path, splitter: &StatementSplitter) -> Result<SplitOutput> {
    let metadata = fs::metadata(path).map_err(|e| file_access(path, e))?;

    if metadata.len() >= LARGE_FILE_THRESHOLD {
        let file = File::open(path).map_err(|e| file_access(path, e))?;
        splitter
            .split_reader(BufReader::new(file))
            .map_err(|e| file_access(path, e))
    } else {
        let content = fs::read_to_string(path).map_err(|e| file_access(path, e))?;
        Ok(splitter.split(&content))
    }
}

fn file_access(path: &Path, source: std::io::Error) -> CypherModuleError {
    CypherModuleError::FileAccess {
        path: path.to_path_buf(),
        source,
    }
}

fn print_diagnostics(report: &RunReport, errors: &ErrorOutput, quiet: bool) {
    for failure in report.failures() {
        errors.print(&failure.error);
    }

    if quiet {
        return;
    }

    for file in report.reports() {
        if let Some(unterminated) = &file.output.unterminated {
            let message = format!("{}: {}", file.path.display(), unterminated.describe());
            errors.print_warning(&message, Some(unterminated_hint(unterminated)));
        }
    }
}

const fn unterminated_hint(unterminated: &Unterminated) -> &'static str {
    match unterminated {
        Unterminated::BlockComment { .. } => "the rest of the file was dropped as a comment",
        Unterminated::Quote { .. } => "the rest of the file was kept in the last statement",
    }
}

fn format_report(args: &SplitArgs, report: &RunReport, cli: &Cli) -> Result<String> {
    match args.format {
        OutputFormat::Text => {
            // No ANSI codes in report files
            let mode = if args.output.is_some() {
                ColorMode::Never
            } else {
                cli.color.into()
            };
            TextFormatter::with_verbose(mode, cli.verbose).format(report)
        }
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

#[cfg(test)]
#[path = "split_tests.rs"]
mod tests;
