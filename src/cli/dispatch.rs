//! Help mode versus edit mode

use std::io::Write;

use anyhow::Result;

use crate::editor::Editor;
use crate::error::VmanError;
use crate::models::DocIndex;
use crate::utils::format_path_with_tilde;

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// `vman TOPIC`: hand the topic to Vim's `:help`
    Help { topic: String },
    /// `vman -e NAME`: open every documentation file named `NAME`
    Edit { name: String },
}

/// The edit flag; only recognized as the first argument
pub const EDIT_FLAG: &str = "-e";

impl Invocation {
    /// Select the mode from the first argument alone.
    ///
    /// `-e NAME` is edit mode; any other first argument, including ones that look
    /// like flags (`-c`, `--cmd`), is a `:help` topic taken literally. Words after
    /// the topic or name are ignored.
    pub fn from_args(args: &[String]) -> Result<Self, VmanError> {
        match args {
            [] => Err(VmanError::NotEnoughArguments),
            [flag] if flag == EDIT_FLAG => Err(VmanError::MissingEditTarget),
            [flag, name, ..] if flag == EDIT_FLAG => Ok(Invocation::Edit { name: name.clone() }),
            [topic, ..] => Ok(Invocation::Help { topic: topic.clone() }),
        }
    }
}

/// Everything the command line can ask for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `--complete`: print completion labels from the cache
    Complete,
    /// `--rebuild-cache`: force a rebuild of the completion cache
    RebuildCache,
    /// `--list-dirs`: print the resolved root directories
    ListDirs,
    /// `--help`
    PrintHelp,
    /// `--version`
    PrintVersion,
    Invoke(Invocation),
}

impl Action {
    /// Parse the raw argument list. The long options only count as the first
    /// argument and take nothing after them.
    pub fn from_args(args: &[String]) -> Result<Self, VmanError> {
        let action = match args.first().map(String::as_str) {
            Some("--complete") => Action::Complete,
            Some("--rebuild-cache") => Action::RebuildCache,
            Some("--list-dirs") => Action::ListDirs,
            Some("--help") => Action::PrintHelp,
            Some("--version") => Action::PrintVersion,
            _ => return Invocation::from_args(args).map(Action::Invoke),
        };

        if let [flag, extra, ..] = args {
            return Err(VmanError::UnexpectedArgument { flag: flag.clone(), arg: extra.clone() });
        }
        Ok(action)
    }
}

/// Run an invocation against `editor`.
///
/// `live_index` is only called in edit mode and must perform a fresh scan: edit
/// lookups never read the completion cache. Help mode succeeds as soon as the
/// editor has been launched, whatever the editor makes of the topic.
pub fn dispatch<E, F, W>(invocation: &Invocation, editor: &mut E, live_index: F, out: &mut W) -> Result<()>
where
    E: Editor,
    F: FnOnce() -> Result<DocIndex>,
    W: Write,
{
    match invocation {
        Invocation::Help { topic } => editor.show_help(topic),
        Invocation::Edit { name } => {
            let matches = live_index()?.lookup_exact(name);
            if matches.is_empty() {
                return Err(VmanError::NoManualEntry { name: name.clone() }.into());
            }

            for path in &matches {
                writeln!(out, "{}", format_path_with_tilde(path))?;
            }
            editor.edit(&matches)
        }
    }
}
