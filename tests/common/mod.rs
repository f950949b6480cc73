#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn daybook_cmd() -> Command {
    let mut cmd = Command::cargo_bin("daybook").unwrap();
    cmd.env_remove("DAYBOOK_ROOT");
    cmd.env_remove("DAYBOOK_LOG");
    cmd
}

/// Command running inside an initialized diary
pub fn daybook_in(dir: &Path) -> Command {
    let mut cmd = daybook_cmd();
    cmd.current_dir(dir);
    cmd
}

/// Add an entry and return the short id printed by `add`
pub fn add_entry(dir: &Path, args: &[&str]) -> String {
    let output = daybook_in(dir).arg("add").args(args).output().unwrap();
    assert!(output.status.success(), "add failed: {:?}", output);
    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .trim()
        .strip_prefix("Saved ")
        .expect("add prints the new id")
        .to_string()
}
