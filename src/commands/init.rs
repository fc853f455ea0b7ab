use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::output::ErrorOutput;
use crate::{CypherModuleError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => {
            if !cli.quiet {
                println!("Created configuration file: {}", args.output.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            ErrorOutput::new(cli.color.into()).print(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(CypherModuleError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;
    Ok(())
}

#[must_use]
pub const fn generate_config_template() -> &'static str {
    r#"# cypher-module configuration file

[split]
# Treat ';' and comment markers inside '...' and "..." as literal text.
# Off by default: a ';' inside a string literal splits the statement.
respect_quotes = false

[scanner]
# Extensions picked up when a directory is passed to `split`
extensions = ["cypher", "cql", "cyp"]

# Glob patterns excluded from directory scans
exclude = [
    # "**/archive/**",
]

# Skip files ignored by .gitignore (default: true)
gitignore = true
"#
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
