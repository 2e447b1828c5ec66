use std::fs;
use std::path::Path;
use std::process::{Child, Command, Stdio};

use assert_cmd::cargo::CommandCargoExt;
use tempfile::{tempdir, TempDir};

pub mod client;

/// Starts the server in a fresh directory, without countdown.
pub fn spawn_server() -> (Child, TempDir) {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("clicker.json"), r#"{"countdownSecs":0}"#).unwrap();
    let child = spawn_server_in(dir.path());
    (child, dir)
}

pub fn spawn_server_in(dir: &Path) -> Child {
    Command::cargo_bin("server")
        .unwrap()
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null()) // we don't want to see logs in tests
        .spawn()
        .unwrap()
}
