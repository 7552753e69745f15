//! Launching the editor as an external process

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::Command;

use anyhow::Result;

use crate::error::VmanError;

/// Something that can display Vim help or open files for editing
pub trait Editor {
    /// Show `:help topic` as the only window
    fn show_help(&mut self, topic: &str) -> Result<()>;

    /// Open every path for editing
    fn edit(&mut self, paths: &[PathBuf]) -> Result<()>;
}

/// Arguments asking Vim to run `:help topic` and close every other window
pub fn help_args(topic: &str) -> Vec<String> {
    vec!["-c".to_string(), format!("help {}", topic), "-c".to_string(), "only".to_string()]
}

/// Runs the editor in the foreground and waits for it to exit.
///
/// The editor's own exit status is not inspected: once it has been launched the
/// invocation counts as a success. Only a failure to spawn is reported.
#[derive(Debug, Clone)]
pub struct ProcessEditor {
    program: String,
}

impl ProcessEditor {
    /// `program` is a single executable name or path and is never word-split,
    /// so `/Applications/MacVim Folder/mvim` launches that file
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn run<I, A>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = A>,
        A: AsRef<OsStr>,
    {
        Command::new(&self.program).args(args).status().map_err(|e| VmanError::EditorLaunch {
            program: self.program.clone(),
            reason: e.to_string(),
        })?;

        Ok(())
    }
}

impl Editor for ProcessEditor {
    fn show_help(&mut self, topic: &str) -> Result<()> {
        self.run(help_args(topic))
    }

    fn edit(&mut self, paths: &[PathBuf]) -> Result<()> {
        self.run(paths)
    }
}
