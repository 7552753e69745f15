//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Builder for creating test plugin trees
pub struct PluginTreeBuilder {
    temp_dir: TempDir,
}

impl PluginTreeBuilder {
    /// Create a new builder with an empty root directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the root directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a plugin with a `doc` directory holding the given files
    pub fn with_plugin(self, plugin_dir: &str, doc_files: &[&str]) -> Self {
        let doc_dir = self.temp_dir.path().join(plugin_dir).join("doc");
        fs::create_dir_all(&doc_dir).expect("Failed to create doc dir");
        for file in doc_files {
            fs::write(doc_dir.join(file), format!("*{}*\n", file)).expect("Failed to write doc");
        }
        self
    }

    /// Add an arbitrary file relative to the root
    pub fn with_file(self, relative: &str) -> Self {
        let path = self.temp_dir.path().join(relative);
        fs::create_dir_all(path.parent().expect("file has a parent"))
            .expect("Failed to create parent dir");
        fs::write(&path, "").expect("Failed to write file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for PluginTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A throwaway home directory with its own config and cache locations
pub struct TestHome {
    pub home: TempDir,
}

impl TestHome {
    pub fn new() -> Self {
        Self { home: TempDir::new().expect("Failed to create temp home") }
    }

    pub fn path(&self) -> &Path {
        self.home.path()
    }

    /// `~/.vim`, the default plugin root
    pub fn vim_dir(&self) -> PathBuf {
        self.home.path().join(".vim")
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.home.path().join(".cache")
    }

    pub fn config_dir(&self) -> PathBuf {
        self.home.path().join(".config")
    }

    /// Add a plugin with documentation under `~/.vim`
    pub fn add_doc(&self, plugin_dir: &str, file: &str) -> PathBuf {
        let doc_dir = self.vim_dir().join(plugin_dir).join("doc");
        fs::create_dir_all(&doc_dir).expect("Failed to create doc dir");
        let path = doc_dir.join(file);
        fs::write(&path, "").expect("Failed to write doc");
        path
    }

    /// Write `~/.config/vman/config.json`
    pub fn write_config(&self, json: &str) {
        let dir = self.config_dir().join("vman");
        fs::create_dir_all(&dir).expect("Failed to create config dir");
        fs::write(dir.join("config.json"), json).expect("Failed to write config");
    }

    /// The vman binary with an isolated environment
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_vman"));
        cmd.env("HOME", self.home.path())
            .env("XDG_CACHE_HOME", self.cache_dir())
            .env("XDG_CONFIG_HOME", self.config_dir())
            .env_remove("VMAN_DIR")
            .env_remove("VMAN_VERBOSE")
            .env_remove("VMAN_EXPIRE")
            .env_remove("EDITOR");
        cmd
    }

    /// Install a fake editor that records its arguments to `log` and exits with `status`
    #[cfg(unix)]
    pub fn fake_vim(&self, status: i32) -> (PathBuf, PathBuf) {
        self.fake_vim_in("bin", status)
    }

    /// Same as `fake_vim`, installed under `<home>/<bin_dir>`
    #[cfg(unix)]
    pub fn fake_vim_in(&self, bin_dir: &str, status: i32) -> (PathBuf, PathBuf) {
        use std::os::unix::fs::PermissionsExt;

        let bin_dir = self.home.path().join(bin_dir);
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        let log = self.home.path().join("editor.log");
        let script = bin_dir.join("fakevim");
        fs::write(
            &script,
            format!("#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\nexit {}\n", log.display(), status),
        )
        .expect("Failed to write fake editor");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod fake editor");
        (script, log)
    }
}

impl Default for TestHome {
    fn default() -> Self {
        Self::new()
    }
}
