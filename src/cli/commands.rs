use std::io::{self, Write};

use anyhow::Result;
use chrono::Utc;
use clap::{CommandFactory, Parser};

use super::dispatch::{Action, dispatch};
use crate::config::Settings;
use crate::editor::ProcessEditor;
use crate::index_storage::{CacheManager, JsonFileStore};
use crate::indexer::{build_index, resolve_roots};
use crate::models::DocIndex;
use crate::utils::{default_root, editor_from_env, format_path_with_tilde};

const USAGE: &str = "vman [-e] TOPIC\n       vman --complete | --rebuild-cache | --list-dirs";

const AFTER_HELP: &str = "\
Modes (chosen by the first argument only):
  TOPIC              Open :help TOPIC in Vim (TOPIC may start with '-')
  -e NAME            Open every documentation file named NAME for editing
  --complete         Print completion candidates, one per line (served from the cache)
  --rebuild-cache    Rebuild the completion cache now
  --list-dirs        Show the directories that are scanned for documentation
  --help             Print this help
  --version          Print the version";

#[derive(Parser)]
#[command(name = "vman")]
#[command(version = "0.1.0")]
#[command(about = "View or edit the documentation of installed Vim plugins", long_about = None)]
#[command(override_usage = USAGE, after_help = AFTER_HELP)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Raw arguments; the first one selects the mode
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let invocation = match Action::from_args(&cli.args)? {
        Action::Complete => return print_completions(),
        Action::RebuildCache => return rebuild_cache(),
        Action::ListDirs => return list_dirs(),
        Action::PrintHelp => {
            Cli::command().print_help()?;
            return Ok(());
        }
        Action::PrintVersion => {
            print!("{}", Cli::command().render_version());
            return Ok(());
        }
        Action::Invoke(invocation) => invocation,
    };
    let mut editor = ProcessEditor::new(editor_from_env());

    // Settings are only loaded once a lookup happens, so a broken config file
    // does not get in the way of plain :help
    let live_index = || -> Result<DocIndex> {
        let settings = Settings::load()?;
        Ok(build_index(&settings.dirs, &default_root()?))
    };

    let mut stdout = io::stdout().lock();
    dispatch(&invocation, &mut editor, live_index, &mut stdout)
}

fn cache_manager(settings: &Settings) -> Result<CacheManager<JsonFileStore>> {
    Ok(CacheManager::new(JsonFileStore::in_cache_dir()?, settings.expire_days))
}

fn print_completions() -> Result<()> {
    let settings = Settings::load()?;
    let default_root = default_root()?;
    let build = || build_index(&settings.dirs, &default_root);

    let index = match cache_manager(&settings) {
        Ok(mut manager) => manager.get_or_build(Utc::now(), build),
        Err(e) => {
            eprintln!("Warning: Completion cache unavailable: {:#}", e);
            build()
        }
    };

    let mut stdout = io::stdout().lock();
    for label in index.list_labels(settings.verbose) {
        writeln!(stdout, "{}", label)?;
    }
    Ok(())
}

fn rebuild_cache() -> Result<()> {
    let settings = Settings::load()?;
    let default_root = default_root()?;
    let roots = resolve_roots(&settings.dirs, &default_root);

    let mut manager = cache_manager(&settings)?;
    let index = manager.rebuild(Utc::now(), || build_index(&settings.dirs, &default_root));

    eprintln!(
        "Indexed {} documentation files from {} roots ({} doc directories)",
        index.len(),
        roots.len(),
        index.source_dirs().len()
    );
    println!("Cache: {}", format_path_with_tilde(manager.store().dir()));
    Ok(())
}

fn list_dirs() -> Result<()> {
    let settings = Settings::load()?;
    let roots = resolve_roots(&settings.dirs, &default_root()?);

    for root in roots {
        let marker = if root.is_dir() { "" } else { " (missing)" };
        println!("{}{}", format_path_with_tilde(&root), marker);
    }
    Ok(())
}
