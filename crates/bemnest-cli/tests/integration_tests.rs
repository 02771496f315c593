//! Integration tests for the bemnest binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PAGE: &str = r#"<!doctype html>
<html>
  <body>
    <nav class="menu">
      <a class="menu__item menu__item_active" href="/">Home</a>
    </nav>
    <button class="btn_primary">Go</button>
  </body>
</html>
"#;

/// A bemnest command running inside `dir`, isolated from the user's
/// environment and config.
fn bemnest(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bemnest").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env("BEMNEST__OUTPUT__NO_COLOR", "true")
        .env("XDG_CONFIG_HOME", dir.join(".xdg"))
        .env("HOME", dir);
    cmd
}

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("index.html"), PAGE).unwrap();
    temp
}

#[test]
fn help_flag() {
    let temp = TempDir::new().unwrap();
    bemnest(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("BEM"))
        .stdout(predicate::str::contains("run"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    bemnest(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn run_scaffolds_the_tree() {
    let temp = project();

    bemnest(temp.path())
        .args(["run", "index.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let root = temp.path();
    assert!(root.join("blocks/menu/menu.css").is_file());
    assert!(root.join("blocks/menu/__item/menu__item.css").is_file());
    assert!(root
        .join("blocks/menu/__item/_active/menu__item_active.css")
        .is_file());
    assert!(root.join("blocks/btn/_primary/btn_primary.css").is_file());

    let stylesheet = fs::read_to_string(root.join("pages/index.css")).unwrap();
    assert!(stylesheet.starts_with("/* @import url(../vendor/normalize.css); */\n"));
    assert!(stylesheet.contains("@import url(../blocks/menu/menu.css);"));

    let ledger = fs::read_to_string(root.join(".listOfUsedClasses.json")).unwrap();
    assert!(ledger.contains("\"menu__item_active\""));
}

#[test]
fn second_run_has_nothing_to_do() {
    let temp = project();
    bemnest(temp.path()).args(["run", "index.html"]).assert().success();

    bemnest(temp.path())
        .args(["run", "index.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing new to scaffold"));

    let stylesheet = fs::read_to_string(temp.path().join("pages/index.css")).unwrap();
    assert_eq!(stylesheet.matches("menu/menu.css").count(), 1);
}

#[test]
fn dry_run_writes_nothing() {
    let temp = project();

    bemnest(temp.path())
        .args(["run", "index.html", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would create"));

    assert!(!temp.path().join("blocks").exists());
    assert!(!temp.path().join(".listOfUsedClasses.json").exists());
}

#[test]
fn root_flag_places_the_tree_elsewhere() {
    let temp = project();
    fs::create_dir(temp.path().join("site")).unwrap();

    bemnest(temp.path())
        .args(["run", "index.html", "--root", "site"])
        .assert()
        .success();

    assert!(temp.path().join("site/blocks/menu/menu.css").is_file());
    assert!(temp.path().join("site/pages/index.css").is_file());
    assert!(!temp.path().join("blocks").exists());
}

#[test]
fn json_report_is_machine_readable() {
    let temp = project();

    let assert = bemnest(temp.path())
        .args(["--output-format", "json", "run", "index.html"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["total_classes"], 4);
    assert_eq!(report["dry_run"], false);
    assert_eq!(
        report["appended_imports"][0],
        "@import url(../blocks/menu/menu.css);"
    );
}

#[test]
fn config_file_changes_the_layout() {
    let temp = project();
    fs::write(
        temp.path().join(".bemnest.toml"),
        "[layout]\nblocks_dir = \"bem\"\nextension = \"scss\"\n",
    )
    .unwrap();

    bemnest(temp.path()).args(["run", "index.html"]).assert().success();

    assert!(temp.path().join("bem/menu/menu.scss").is_file());
    let stylesheet = fs::read_to_string(temp.path().join("pages/index.scss")).unwrap();
    assert!(stylesheet.contains("@import url(../bem/menu/menu.scss);"));
}

#[test]
fn classify_lists_kinds() {
    let temp = project();

    bemnest(temp.path())
        .args(["classify", "index.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("block-modifier"))
        .stdout(predicate::str::contains("element-modifier"));

    bemnest(temp.path())
        .args(["classify", "index.html", "--kind", "block"])
        .assert()
        .success()
        .stdout(predicate::str::contains("menu"))
        .stdout(predicate::str::contains("btn_primary").not());
}

#[test]
fn init_writes_a_local_config_once() {
    let temp = TempDir::new().unwrap();

    bemnest(temp.path()).arg("init").assert().success();
    let written = fs::read_to_string(temp.path().join(".bemnest.toml")).unwrap();
    assert!(written.contains("blocks_dir = \"blocks\""));

    bemnest(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));
}

#[test]
fn config_get_reads_environment() {
    let temp = TempDir::new().unwrap();

    bemnest(temp.path())
        .args(["config", "get", "layout.pages_dir"])
        .env("BEMNEST__LAYOUT__PAGES_DIR", "views")
        .assert()
        .success()
        .stdout(predicate::str::diff("views\n"));
}

#[test]
fn shell_completions() {
    let temp = TempDir::new().unwrap();
    bemnest(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bemnest"));
}
