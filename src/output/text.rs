use std::io::Write;

use crate::error::Result;
use crate::splitter::Statement;

use super::{ColorMode, FileFailure, FileOutcome, FileReport, ReportFormatter, RunReport, ansi};

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    /// `verbose` 1 lists each statement's first line, 2 prints full statements.
    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        let use_colors = mode.resolve(std::io::IsTerminal::is_terminal(&std::io::stdout()));
        Self {
            use_colors,
            verbose,
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn format_report(&self, report: &FileReport, output: &mut Vec<u8>) {
        writeln!(output, "File: {}...", report.path.display()).ok();
        writeln!(
            output,
            "\tNumber of statements: {}",
            report.statement_count()
        )
        .ok();

        if let Some(unterminated) = &report.output.unterminated {
            let warning = self.paint("⚠ Warning:", ansi::YELLOW);
            writeln!(output, "\t{warning} {}", unterminated.describe()).ok();
        }

        if self.verbose > 0 {
            for statement in &report.output.statements {
                self.format_statement(statement, output);
            }
        }
    }

    fn format_statement(&self, statement: &Statement, output: &mut Vec<u8>) {
        let label = self.paint(&format!("[line {}]", statement.line), ansi::CYAN);

        if self.verbose >= 2 {
            writeln!(output, "\t{label}").ok();
            for line in statement.text.lines() {
                writeln!(output, "\t  {line}").ok();
            }
            return;
        }

        let first = statement.first_line();
        let ellipsis = if statement.text.len() > first.len() {
            " ..."
        } else {
            ""
        };
        writeln!(output, "\t{label} {first}{ellipsis}").ok();
    }

    fn format_failure(&self, failure: &FileFailure, output: &mut Vec<u8>) {
        let reason = failure
            .error
            .detail()
            .unwrap_or_else(|| failure.error.message());
        let status = self.paint("✗ Error:", ansi::RED);

        writeln!(output, "File: {}...", failure.path.display()).ok();
        writeln!(output, "\t{status} {reason}").ok();
    }

    fn format_summary(&self, report: &RunReport, output: &mut Vec<u8>) {
        let failed = if report.has_failures() {
            self.paint(&report.failed_files.to_string(), ansi::RED)
        } else {
            self.paint("0", ansi::GREEN)
        };

        writeln!(output).ok();
        writeln!(output, "Summary:").ok();
        writeln!(output, "  Files: {}", report.total_files).ok();
        writeln!(output, "  Statements: {}", report.total_statements).ok();
        writeln!(output, "  Failed: {failed}").ok();
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let mut output = Vec::new();

        for outcome in &report.outcomes {
            match outcome {
                FileOutcome::Split(file) => self.format_report(file, &mut output),
                FileOutcome::Failed(failure) => self.format_failure(failure, &mut output),
            }
        }

        if report.total_files > 1 || report.has_failures() {
            self.format_summary(report, &mut output);
        }

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
