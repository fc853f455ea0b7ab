#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the cypher-module binary.
#[macro_export]
macro_rules! cypher_module {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("cypher-module"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.cypher-module.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".cypher-module.toml", content);
    }
}

/// A small module exercising both comment styles.
pub const SCHEMA_MODULE: &str = "\
// Schema for the social graph
CREATE CONSTRAINT ON (u:User) ASSERT u.id IS UNIQUE;

/**
 * Seed users
 */
CREATE (:User {id: 1, name: 'Ada'});
CREATE (:User {id: 2, name: 'Grace'}); // second user

MATCH (a:User {id: 1}), (b:User {id: 2})
CREATE (a)-[:KNOWS]->(b);
";
