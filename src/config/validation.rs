use globset::Glob;

use crate::error::{CypherModuleError, Result};

use super::Config;

/// Semantic checks that TOML deserialization cannot express.
///
/// # Errors
/// Returns the first problem found: an empty extension list, a malformed
/// extension, or an exclude pattern that is not a valid glob.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_extensions(&config.scanner.extensions)?;
    validate_exclude_patterns(&config.scanner.exclude)
}

fn validate_extensions(extensions: &[String]) -> Result<()> {
    if extensions.is_empty() {
        return Err(CypherModuleError::Config(
            "scanner.extensions cannot be empty".to_string(),
        ));
    }

    for (i, ext) in extensions.iter().enumerate() {
        if ext.trim().is_empty() {
            return Err(CypherModuleError::Config(format!(
                "scanner.extensions[{i}] cannot be empty"
            )));
        }
        if ext.starts_with('.') {
            return Err(CypherModuleError::Config(format!(
                "scanner.extensions[{i}]: use \"{}\" without the leading dot",
                ext.trim_start_matches('.')
            )));
        }
    }

    Ok(())
}

fn validate_exclude_patterns(patterns: &[String]) -> Result<()> {
    for pattern in patterns {
        Glob::new(pattern).map_err(|e| CypherModuleError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
