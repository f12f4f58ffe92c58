//! Shared testing utilities for launch-control CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PLAYBOOK: &str = "{PLAYBOOK}

Repository: {REPO}
Ticket: {JIRA_TICKET}

Objective: {OBJECTIVE}

{INJECTIONS}
";

pub const CUSTOM: &str = "{OBJECTIVE}

Repository: {REPO}
Ticket: {JIRA_TICKET}
";

/// Isolated project root with templates in place.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let prompts = root.path().join("prompts");
        fs::create_dir_all(&prompts).expect("Failed to create prompts directory");
        fs::write(prompts.join("playbook.txt"), PLAYBOOK).expect("Failed to write playbook");
        fs::write(prompts.join("custom.txt"), CUSTOM).expect("Failed to write custom template");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn launch_pad(&self) -> PathBuf {
        self.root().join("prompts/launch_pad")
    }

    /// Write `targets/<target_type>/<stack>.json`.
    pub fn write_targets(&self, target_type: &str, stack: &str, json: &str) {
        let dir = self.root().join("targets").join(target_type);
        fs::create_dir_all(&dir).expect("Failed to create targets directory");
        fs::write(dir.join(format!("{stack}.json")), json).expect("Failed to write targets");
    }

    /// Point the session client at `api_url`.
    pub fn write_config(&self, api_url: &str) {
        let content = format!("[api]\napi_url = \"{api_url}\"\ntimeout_secs = 5\n");
        fs::write(self.root().join("launch-control.toml"), content).expect("Failed to write config");
    }

    /// Sorted names of files currently on the launch pad.
    pub fn launch_pad_files(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.launch_pad()) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    pub fn read_launch_pad(&self, name: &str) -> String {
        fs::read_to_string(self.launch_pad().join(name)).expect("Failed to read prompt file")
    }

    /// Command for the compiled binary, run in the project root without an API key.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("launch-control").expect("Failed to locate binary");
        cmd.current_dir(self.root()).env_remove("DEVIN_API_KEY").env_remove("RUST_LOG");
        cmd
    }

    /// Same as [`TestContext::cli`] with an API key set.
    pub fn cli_with_key(&self) -> Command {
        let mut cmd = self.cli();
        cmd.env("DEVIN_API_KEY", "test-key");
        cmd
    }
}
