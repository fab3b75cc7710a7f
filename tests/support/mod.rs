#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary store file plus a command builder pointed at it.
pub struct TestStore {
    dir: TempDir,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn file(&self) -> PathBuf {
        self.dir.path().join("tasks.json")
    }

    /// A `tsk` command bound to this store via the TSK_FILE env var.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("tsk").expect("binary");
        cmd.env("TSK_FILE", self.file());
        cmd
    }

    pub fn write_store(&self, contents: &str) {
        fs::write(self.file(), contents).expect("write store file");
    }

    pub fn read_store(&self) -> String {
        fs::read_to_string(self.file()).expect("read store file")
    }
}
