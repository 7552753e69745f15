//! Data models for plugin documentation discovery.
//!
//! - [`DocEntry`] - One documentation file found inside a plugin `doc` directory
//! - [`DocIndex`] - The ordered collection of entries produced by a single scan

pub mod doc_entry;

pub use doc_entry::{DocEntry, DocIndex};
