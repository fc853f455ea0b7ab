use std::fs;

use tempfile::TempDir;

use super::{generate_config_template, run_init_impl};
use crate::CypherModuleError;
use crate::cli::InitArgs;
use crate::config::{Config, validate_config};

#[test]
fn template_is_valid_config_matching_defaults() {
    let config: Config = toml::from_str(generate_config_template()).unwrap();
    assert!(validate_config(&config).is_ok());
    assert_eq!(config, Config::default());
}

#[test]
fn template_documents_both_sections() {
    let template = generate_config_template();
    assert!(template.contains("[split]"));
    assert!(template.contains("respect_quotes = false"));
    assert!(template.contains("[scanner]"));
    assert!(template.contains(r#"extensions = ["cypher", "cql", "cyp"]"#));
    assert!(template.contains("gitignore = true"));
}

#[test]
fn run_init_creates_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".cypher-module.toml");

    let args = InitArgs {
        output: config_path.clone(),
        force: false,
    };

    run_init_impl(&args).unwrap();
    let content = fs::read_to_string(&config_path).unwrap();
    assert_eq!(content, generate_config_template());
}

#[test]
fn run_init_fails_if_file_exists_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".cypher-module.toml");
    fs::write(&config_path, "# existing").unwrap();

    let args = InitArgs {
        output: config_path.clone(),
        force: false,
    };

    let err = run_init_impl(&args).unwrap_err();
    assert!(matches!(err, CypherModuleError::Config(_)));
    assert!(err.to_string().contains("already exists"));
    assert_eq!(fs::read_to_string(&config_path).unwrap(), "# existing");
}

#[test]
fn run_init_overwrites_with_force() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".cypher-module.toml");
    fs::write(&config_path, "# existing").unwrap();

    let args = InitArgs {
        output: config_path.clone(),
        force: true,
    };

    run_init_impl(&args).unwrap();
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[scanner]"));
}
