use super::*;

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
    assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
    assert!("sarif".parse::<OutputFormat>().is_err());
}

#[test]
fn output_format_default_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn color_mode_resolve_explicit() {
    assert!(ColorMode::Always.resolve(false));
    assert!(!ColorMode::Never.resolve(true));
}

#[test]
fn color_mode_auto_without_terminal_is_plain() {
    assert!(!ColorMode::Auto.resolve(false));
}

#[test]
fn run_report_totals() {
    use std::path::PathBuf;

    use crate::error::CypherModuleError;
    use crate::splitter::StatementSplitter;

    let splitter = StatementSplitter::default();
    let report = RunReport::new(vec![
        FileOutcome::Split(FileReport {
            path: PathBuf::from("a.cypher"),
            output: splitter.split("A;B;"),
        }),
        FileOutcome::Failed(FileFailure {
            path: PathBuf::from("b.cypher"),
            error: CypherModuleError::Config("x".to_string()),
        }),
        FileOutcome::Split(FileReport {
            path: PathBuf::from("c.cypher"),
            output: splitter.split("C;"),
        }),
    ]);

    assert_eq!(report.total_files, 3);
    assert_eq!(report.total_statements, 3);
    assert_eq!(report.failed_files, 1);
    assert!(report.has_failures());
    assert_eq!(report.reports().count(), 2);
    assert_eq!(report.failures().count(), 1);
    assert!(report.outcomes[1].is_failed());
}
