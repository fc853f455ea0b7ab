//! Filesystem access used by the config loader, behind a trait so lookup
//! order can be tested without touching the real disk.

use std::path::{Path, PathBuf};

pub trait FileSystem {
    /// # Errors
    /// Returns an error if the file cannot be read or is not UTF-8.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// True only for regular files; a directory named like a config file is skipped.
    fn is_file(&self, path: &Path) -> bool;

    /// Directory searched for `.cypher-module.toml`.
    ///
    /// # Errors
    /// Returns an error if the working directory cannot be determined.
    fn working_dir(&self) -> std::io::Result<PathBuf>;

    /// Per-user directory holding `config.toml`
    /// (`~/.config/cypher-module` on Linux).
    fn user_config_dir(&self) -> Option<PathBuf>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn working_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn user_config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "cypher-module")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

#[cfg(test)]
#[path = "filesystem_tests.rs"]
mod tests;
