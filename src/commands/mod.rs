pub mod config;
pub mod init;
pub mod split;

pub use config::run_config;
pub use init::run_init;
pub use split::run_split;

use std::fs;
use std::path::Path;

use crate::Result;
use crate::config::{ConfigLoader, FileConfigLoader, LoadResult};

/// Load the effective configuration, honouring `--config` and `--no-config`.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult::defaults());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

pub(crate) fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}
