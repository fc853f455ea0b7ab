use std::fmt::Write;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::output::{ErrorOutput, OutputFormat};
use crate::{CypherModuleError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::load_config;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    let errors = ErrorOutput::new(cli.color.into());
    let result = match &args.action {
        ConfigAction::Validate { config } => run_config_validate_impl(config).map(|()| {
            if !cli.quiet {
                println!("Configuration is valid: {}", config.display());
            }
        }),
        ConfigAction::Show { config, format } => {
            run_config_show_impl(config.as_deref(), *format, cli.no_config)
                .map(|output| print!("{output}"))
        }
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            errors.print(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has invalid values.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(CypherModuleError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    FileConfigLoader::new().load_from_path(config_path)?;
    Ok(())
}

/// Renders the effective configuration.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialized.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    format: OutputFormat,
    no_config: bool,
) -> Result<String> {
    let loaded = load_config(config_path, no_config)?;
    format_config(&loaded, format)
}

pub(crate) fn format_config(loaded: &LoadResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_config_text(&loaded.config, loaded.source.as_deref())),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&loaded.config)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn format_config_text(config: &Config, source: Option<&Path>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== Effective Configuration ===");
    match source {
        Some(path) => {
            let _ = writeln!(out, "Source: {}", path.display());
        }
        None => {
            let _ = writeln!(out, "Source: (built-in defaults)");
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "[split]");
    let _ = writeln!(out, "  respect_quotes = {}", config.split.respect_quotes);
    let _ = writeln!(out);

    let _ = writeln!(out, "[scanner]");
    let _ = writeln!(
        out,
        "  extensions = {}",
        format_string_list(&config.scanner.extensions)
    );
    let _ = writeln!(
        out,
        "  exclude = {}",
        format_string_list(&config.scanner.exclude)
    );
    let _ = writeln!(out, "  gitignore = {}", config.scanner.gitignore);

    out
}

fn format_string_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| format!("\"{s}\"")).collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
