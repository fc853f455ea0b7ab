//! Integration tests for the `split` command.

mod common;

use common::{SCHEMA_MODULE, TestFixture};
use predicates::prelude::*;

// =============================================================================
// Per-file counts
// =============================================================================

#[test]
fn split_prints_file_name_and_statement_count() {
    let fixture = TestFixture::new();
    fixture.create_file("schema.cypher", SCHEMA_MODULE);

    cypher_module!()
        .current_dir(fixture.path())
        .args(["--no-config", "split", "schema.cypher"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File: schema.cypher..."))
        .stdout(predicate::str::contains("\tNumber of statements: 4"))
        .stdout(predicate::str::contains("Summary:").not());
}

#[test]
fn split_reports_files_in_argument_order_with_summary() {
    let fixture = TestFixture::new();
    fixture.create_file("b.cypher", "RETURN 1;");
    fixture.create_file("a.cypher", "RETURN 1; RETURN 2;");

    let output = cypher_module!()
        .current_dir(fixture.path())
        .args(["--no-config", "split", "b.cypher", "a.cypher"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let b_pos = stdout.find("File: b.cypher...").unwrap();
    let a_pos = stdout.find("File: a.cypher...").unwrap();
    assert!(b_pos < a_pos);
    assert!(stdout.contains("  Files: 2"));
    assert!(stdout.contains("  Statements: 3"));
}

#[test]
fn split_comment_only_file_has_zero_statements() {
    let fixture = TestFixture::new();
    fixture.create_file("empty.cypher", "// nothing here\n/** or here */\n;;\n");

    cypher_module!()
        .current_dir(fixture.path())
        .args(["--no-config", "split", "empty.cypher"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\tNumber of statements: 0"));
}

#[test]
fn split_line_comment_inside_doc_block_hides_its_closer() {
    let fixture = TestFixture::new();
    fixture.create_file(
        "doc.cypher",
        "/** see http://neo4j.com */\nRETURN 1;\n/** x */RETURN 2;\n",
    );

    cypher_module!()
        .current_dir(fixture.path())
        .args(["--no-config", "split", "-v", "doc.cypher"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\tNumber of statements: 1"))
        .stdout(predicate::str::contains("[line 3] RETURN 2"));
}

#[test]
fn split_verbose_lists_statements_with_lines() {
    let fixture = TestFixture::new();
    fixture.create_file("schema.cypher", SCHEMA_MODULE);

    cypher_module!()
        .current_dir(fixture.path())
        .args(["--no-config", "split", "-v", "schema.cypher"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[line 2] CREATE CONSTRAINT ON (u:User) ASSERT u.id IS UNIQUE",
        ))
        .stdout(predicate::str::contains(
            "[line 10] MATCH (a:User {id: 1}), (b:User {id: 2}) ...",
        ));
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn split_missing_file_is_skipped_with_exit_code_1() {
    let fixture = TestFixture::new();
    fixture.create_file("good.cypher", "RETURN 1;");

    cypher_module!()
        .current_dir(fixture.path())
        .args(["--no-config", "split", "missing.cypher", "good.cypher"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("File: missing.cypher..."))
        .stdout(predicate::str::contains("File: good.cypher..."))
        .stdout(predicate::str::contains("  Failed: 1"))
        .stderr(predicate::str::contains("FileAccess"));
}

#[test]
fn split_fail_fast_stops_before_report() {
    let fixture = TestFixture::new();
    fixture.create_file("good.cypher", "RETURN 1;");

    cypher_module!()
        .current_dir(fixture.path())
        .args([
            "--no-config",
            "split",
            "--fail-fast",
            "missing.cypher",
            "good.cypher",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing.cypher"));
}

#[test]
fn split_unterminated_block_comment_warns() {
    let fixture = TestFixture::new();
    fixture.create_file("open.cypher", "RETURN 1;\n/** never closed\nRETURN 2;");

    cypher_module!()
        .current_dir(fixture.path())
        .args(["--no-config", "split", "open.cypher"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\tNumber of statements: 1"))
        .stderr(predicate::str::contains(
            "unterminated block comment opened on line 2",
        ));
}

#[test]
fn split_invalid_exclude_pattern_exits_2() {
    let fixture = TestFixture::new();

    cypher_module!()
        .current_dir(fixture.path())
        .args(["--no-config", "split", ".", "-x", "[invalid"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("InvalidPattern"));
}

// =============================================================================
// Directories and configuration
// =============================================================================

#[test]
fn split_directory_uses_extensions_and_excludes() {
    let fixture = TestFixture::new();
    fixture.create_file("db/one.cypher", "RETURN 1;");
    fixture.create_file("db/two.cql", "RETURN 2; RETURN 3;");
    fixture.create_file("db/readme.md", "# not; a; module;");
    fixture.create_file("db/archive/old.cypher", "RETURN 4;");

    cypher_module!()
        .current_dir(fixture.path())
        .args(["--no-config", "split", "db", "-x", "**/archive/**"])
        .assert()
        .success()
        .stdout(predicate::str::contains("one.cypher"))
        .stdout(predicate::str::contains("two.cql"))
        .stdout(predicate::str::contains("readme.md").not())
        .stdout(predicate::str::contains("old.cypher").not())
        .stdout(predicate::str::contains("  Statements: 3"));
}

#[test]
fn split_picks_up_local_config() {
    let fixture = TestFixture::new();
    fixture.create_config("[split]\nrespect_quotes = true\n");
    fixture.create_file("q.cypher", "RETURN 'a;b';");

    cypher_module!()
        .current_dir(fixture.path())
        .args(["split", "q.cypher"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\tNumber of statements: 1"));
}

#[test]
fn split_ignores_quotes_by_default() {
    let fixture = TestFixture::new();
    fixture.create_file("q.cypher", "RETURN 'a;b';");

    cypher_module!()
        .current_dir(fixture.path())
        .args(["--no-config", "split", "q.cypher"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\tNumber of statements: 2"));
}

#[test]
fn split_invalid_config_exits_2() {
    let fixture = TestFixture::new();
    fixture.create_config("[scanner]\nextensions = []\n");
    fixture.create_file("a.cypher", "RETURN 1;");

    cypher_module!()
        .current_dir(fixture.path())
        .args(["split", "a.cypher"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("scanner.extensions"));
}

// =============================================================================
// Output formats
// =============================================================================

#[test]
fn split_json_output() {
    let fixture = TestFixture::new();
    fixture.create_file("schema.cypher", SCHEMA_MODULE);

    let output = cypher_module!()
        .current_dir(fixture.path())
        .args(["--no-config", "split", "--format", "json", "schema.cypher"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["summary"]["total_files"], 1);
    assert_eq!(json["files"][0]["statement_count"], 4);
    assert_eq!(
        json["files"][0]["statements"][1]["text"],
        "CREATE (:User {id: 1, name: 'Ada'})"
    );
    assert_eq!(json["files"][0]["statements"][1]["line"], 7);
}

#[test]
fn split_writes_report_to_output_file() {
    let fixture = TestFixture::new();
    fixture.create_file("a.cypher", "RETURN 1;");

    cypher_module!()
        .current_dir(fixture.path())
        .args(["--no-config", "split", "a.cypher", "-o", "report.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let report = std::fs::read_to_string(fixture.path().join("report.txt")).unwrap();
    assert!(report.contains("File: a.cypher..."));
}

#[test]
fn split_quiet_suppresses_stdout() {
    let fixture = TestFixture::new();
    fixture.create_file("a.cypher", "RETURN 1;");

    cypher_module!()
        .current_dir(fixture.path())
        .args(["--no-config", "-q", "split", "a.cypher"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
