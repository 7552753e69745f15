//! vman - a `man` for Vim plugin documentation
//!
//! Finds the help files shipped by installed Vim plugins and opens them either
//! through Vim's `:help` or as plain buffers for editing. It supports:
//!
//! - Scanning plugin roots for `doc` directories, skipping dein.vim's merged copy
//! - Exact-name lookup across every root, keeping duplicates
//! - Shell completion candidates served from a time-expiring cache
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use vman::build_index;
//!
//! let index = build_index(&[], &PathBuf::from("/home/alice/.vim"));
//! for path in index.lookup_exact("fugitive.txt") {
//!     println!("{}", path.display());
//! }
//! ```

pub mod cli;
pub mod config;
pub mod editor;
pub mod error;
pub mod index_storage;
pub mod indexer;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use error::VmanError;
pub use indexer::{build_index, resolve_roots, scan};
pub use models::{DocEntry, DocIndex};
pub use utils::{format_path_with_tilde, select_editor};
