use serde::Serialize;

use crate::error::Result;

use super::{FileFailure, FileReport, ReportFormatter, RunReport};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    files: Vec<FileResult>,
    failures: Vec<FailureResult>,
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    total_statements: usize,
    failed_files: usize,
}

#[derive(Serialize)]
struct FileResult {
    path: String,
    statement_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    unterminated: Option<String>,
    statements: Vec<StatementResult>,
}

#[derive(Serialize)]
struct StatementResult {
    line: usize,
    text: String,
}

#[derive(Serialize)]
struct FailureResult {
    path: String,
    error_type: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                total_files: report.total_files,
                total_statements: report.total_statements,
                failed_files: report.failed_files,
            },
            files: report.reports().map(convert_report).collect(),
            failures: report.failures().map(convert_failure).collect(),
        };

        Ok(format!("{}\n", serde_json::to_string_pretty(&output)?))
    }
}

fn convert_report(report: &FileReport) -> FileResult {
    FileResult {
        path: report.path.display().to_string(),
        statement_count: report.statement_count(),
        unterminated: report.output.unterminated.map(|u| u.describe()),
        statements: report
            .output
            .statements
            .iter()
            .map(|s| StatementResult {
                line: s.line,
                text: s.text.clone(),
            })
            .collect(),
    }
}

fn convert_failure(failure: &FileFailure) -> FailureResult {
    FailureResult {
        path: failure.path.display().to_string(),
        error_type: failure.error.error_type(),
        message: failure.error.to_string(),
        detail: failure.error.detail(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
