use serde::{Deserialize, Serialize};

use crate::splitter::SplitOptions;

/// Extensions recognised as Cypher modules when scanning directories.
pub const DEFAULT_EXTENSIONS: &[&str] = &["cypher", "cql", "cyp"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub split: SplitConfig,

    #[serde(default)]
    pub scanner: ScannerConfig,
}

/// Segmentation settings [split].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SplitConfig {
    /// Keep `;` and comment markers inside quoted literals (default: false).
    #[serde(default)]
    pub respect_quotes: bool,
}

impl SplitConfig {
    #[must_use]
    pub const fn options(&self) -> SplitOptions {
        SplitOptions {
            respect_quotes: self.respect_quotes,
        }
    }
}

/// Directory discovery settings [scanner].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// File extensions picked up when a directory is scanned.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns excluded from directory scans.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Respect .gitignore rules (default: true)
    #[serde(default = "default_true")]
    pub gitignore: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: Vec::new(),
            gitignore: true,
        }
    }
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|&s| s.to_string()).collect()
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
