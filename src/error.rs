use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CypherModuleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl CypherModuleError {
    /// Short category name shown as the error heading.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileAccess { .. } => "FileAccess",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }

    /// One-line description without the underlying cause.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::FileAccess { path, source } => {
                format!("{} ({:?})", path.display(), source.kind())
            }
            Self::InvalidPattern { pattern, .. } => format!("'{pattern}'"),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(_) => "failed to parse configuration".to_string(),
            Self::JsonSerialize(_) => "failed to serialize output".to_string(),
        }
    }

    /// Underlying cause, if any.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileAccess { source, .. } => Some(source.to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::TomlParse(e) => Some(e.to_string()),
            Self::JsonSerialize(e) => Some(e.to_string()),
            Self::Config(_) | Self::Io(_) => None,
        }
    }

    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::FileAccess { source, .. } | Self::Io(source) => io_suggestion(source.kind()),
            Self::InvalidPattern { .. } => {
                Some("Check the glob syntax, e.g. \"**/migrations/**\" or \"*.cql\"")
            }
            Self::TomlParse(_) => Some("Run `cypher-module config validate` to check the file"),
            Self::Config(_) | Self::JsonSerialize(_) => None,
        }
    }
}

const fn io_suggestion(kind: ErrorKind) -> Option<&'static str> {
    match kind {
        ErrorKind::NotFound => Some("Check that the file path exists and is spelled correctly"),
        ErrorKind::PermissionDenied => Some("Check file permissions"),
        ErrorKind::InvalidData => {
            Some("The file is not valid UTF-8 text; it may be binary or corrupted")
        }
        _ => None,
    }
}

pub type Result<T> = std::result::Result<T, CypherModuleError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
