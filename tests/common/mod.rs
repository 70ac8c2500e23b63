//! Shared testing utilities for ghctx CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables that would leak the developer's own setup into a test run.
const ISOLATED_ENV_VARS: [&str; 4] = ["GH_HOST", "GH_TOKEN", "GITHUB_TOKEN", "RUST_LOG"];

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with an empty config directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let config_dir = root.path().join("config");
        fs::create_dir_all(&config_dir).expect("Failed to create test config directory");

        Self { root, config_dir }
    }

    /// Directory used as `GHCTX_CONFIG_DIR`.
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Write `config.toml` into the test config directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.config_dir.join("config.toml"), content).expect("Failed to write config");
    }

    /// Point identity lookups at `graphql_url`, keeping `default_host`.
    pub fn write_config_with_endpoint(&self, default_host: &str, graphql_url: &str) {
        self.write_config(&format!(
            "default_host = \"{}\"\n\n[api]\ngraphql_url = \"{}\"\ntimeout_secs = 5\n",
            default_host, graphql_url
        ));
    }

    /// Build a command for invoking the compiled `ghctx` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("ghctx").expect("Failed to locate ghctx binary");
        cmd.current_dir(self.root.path()).env("GHCTX_CONFIG_DIR", &self.config_dir);
        for key in ISOLATED_ENV_VARS {
            cmd.env_remove(key);
        }
        cmd
    }
}
