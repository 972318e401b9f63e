// ABOUTME: Integration tests for the dumpinfo CLI commands.
// ABOUTME: Validates --help output, init, report, and snapshot commands.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn dumpinfo_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("dumpinfo"))
}

const INVENTORY: &str = r#"
root_url: http://ci
server:
  display_name: CI
  version: "2.0"
nodes:
  - display_name: agent-1
    online: true
    executors: 2
    url: computer/agent-1
jdks:
  - name: jdk17
    home: /opt/jdk17
plugins:
  - long_name: Git plugin
    version: "5.2"
    url: https://plugins.example/git
"#;

fn write_inventory(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("inventory.yml");
    fs::write(&path, INVENTORY).unwrap();
    path
}

#[test]
fn help_shows_commands() {
    dumpinfo_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("bindings"));
}

#[test]
fn init_creates_config_file() {
    let temp_dir = tempfile::tempdir().unwrap();

    dumpinfo_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success();

    let content = fs::read_to_string(temp_dir.path().join("dumpinfo.yml")).unwrap();
    assert!(content.contains("dump_nodes:"));
}

#[test]
fn init_refuses_to_overwrite_existing_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("dumpinfo.yml"), "dump_nodes: true\n").unwrap();

    dumpinfo_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn report_writes_all_sections_by_default() {
    let temp_dir = tempfile::tempdir().unwrap();
    let inventory = write_inventory(temp_dir.path());

    dumpinfo_cmd()
        .current_dir(temp_dir.path())
        .arg("report")
        .arg(&inventory)
        .assert()
        .success()
        .stdout(
            "CI v2.0\n\
             agent-1: online with 2 executor(s) - http://ci/computer/agent-1\n\
             jdk17 at /opt/jdk17\n\
             Git plugin v5.2 - https://plugins.example/git\n",
        );
}

#[test]
fn report_respects_discovered_config_and_flags() {
    let temp_dir = tempfile::tempdir().unwrap();
    let inventory = write_inventory(temp_dir.path());
    fs::write(temp_dir.path().join("dumpinfo.yml"), "dump_plugins: false\n").unwrap();

    dumpinfo_cmd()
        .current_dir(temp_dir.path())
        .arg("report")
        .arg(&inventory)
        .arg("--no-tools")
        .assert()
        .success()
        .stdout("CI v2.0\nagent-1: online with 2 executor(s) - http://ci/computer/agent-1\n");
}

#[test]
fn report_rejects_misspelled_config_flag() {
    let temp_dir = tempfile::tempdir().unwrap();
    let inventory = write_inventory(temp_dir.path());
    fs::write(temp_dir.path().join("dumpinfo.yml"), "dump_node: false\n").unwrap();

    dumpinfo_cmd()
        .current_dir(temp_dir.path())
        .arg("report")
        .arg(&inventory)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration: unknown key `dump_node`"));
}

#[test]
fn report_with_missing_inventory_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    dumpinfo_cmd()
        .current_dir(temp_dir.path())
        .arg("report")
        .arg("missing.yml")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn env_prints_sorted_variables() {
    dumpinfo_cmd()
        .env("DUMPINFO_CLI_TEST", "hello")
        .arg("env")
        .assert()
        .success()
        .stdout(predicate::str::contains("DUMPINFO_CLI_TEST=hello\n"));
}

#[test]
fn props_json_is_one_object() {
    let output = dumpinfo_cmd().args(["props", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value["captured_at"].is_string());
    assert!(value["entries"]["os.name"].is_string());
}

#[test]
fn bindings_without_context_prints_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();

    dumpinfo_cmd()
        .arg("bindings")
        .arg("--base")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn bindings_lists_root_context() {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path().join("comp").join("env");
    fs::create_dir_all(root.join("jdbc")).unwrap();

    dumpinfo_cmd()
        .arg("bindings")
        .arg("--base")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout("jdbc=context\n");
}
