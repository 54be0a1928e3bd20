#![cfg(unix)]

use assert_cmd::cargo::cargo_bin_cmd;
use memlog_testing::TestWorld;
use memlog_testing::fixtures::web_line;
use predicates::prelude::*;

#[test]
fn test_edit_falls_back_to_working_editor() {
    let world = TestWorld::new()
        .with_manifest("run1 = run1.log\n")
        .with_config("[launchers]\neditors = [\"memlog-no-such-editor\", \"true\"]\n");

    let result = world.run(&["edit"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stderr().contains("Opening source file for editing"));
}

#[test]
fn test_open_reports_when_no_browser_works() {
    let world = TestWorld::new().with_config("[launchers]\nbrowsers = [\"false\"]\n");

    let mut cmd = cargo_bin_cmd!("memlog");
    world.configure_command(&mut cmd);
    cmd.arg("open")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Launch error: no browser could open"));
}

#[test]
fn test_parse_then_open_in_browser() {
    let world = TestWorld::new()
        .with_log("run.log", &web_line("@home", 5))
        .with_manifest("run = run.log\n")
        .with_config("[launchers]\nbrowsers = [\"true\"]\n");

    let result = world.run(&["parse", "--browser"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stderr().contains("Opening graph view in browser"));
}

#[test]
fn test_help_lists_commands() {
    let mut cmd = cargo_bin_cmd!("memlog");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("edit"))
        .stdout(predicate::str::contains("open"));
}
