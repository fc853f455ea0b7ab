use std::path::PathBuf;

use crate::error::CypherModuleError;
use crate::splitter::SplitOutput;

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub output: SplitOutput,
}

impl FileReport {
    #[must_use]
    pub const fn statement_count(&self) -> usize {
        self.output.len()
    }
}

/// A file that could not be read; the rest of the run is unaffected.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: CypherModuleError,
}

#[derive(Debug)]
pub enum FileOutcome {
    Split(FileReport),
    Failed(FileFailure),
}

impl FileOutcome {
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Per-file outcomes of one run, in the order the files were requested.
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<FileOutcome>,
    pub total_files: usize,
    pub total_statements: usize,
    pub failed_files: usize,
}

impl RunReport {
    #[must_use]
    pub fn new(outcomes: Vec<FileOutcome>) -> Self {
        let total_files = outcomes.len();
        let (total_statements, failed_files) =
            outcomes
                .iter()
                .fold((0, 0), |(statements, failed), outcome| match outcome {
                    FileOutcome::Split(report) => (statements + report.statement_count(), failed),
                    FileOutcome::Failed(_) => (statements, failed + 1),
                });

        Self {
            outcomes,
            total_files,
            total_statements,
            failed_files,
        }
    }

    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.failed_files > 0
    }

    pub fn reports(&self) -> impl Iterator<Item = &FileReport> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            FileOutcome::Split(report) => Some(report),
            FileOutcome::Failed(_) => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileFailure> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            FileOutcome::Failed(failure) => Some(failure),
            FileOutcome::Split(_) => None,
        })
    }
}
