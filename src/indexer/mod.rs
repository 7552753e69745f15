//! Documentation discovery for installed Vim plugins
//!
//! - [`roots`] - Ordered, deduplicated set of root directories
//! - [`scanner`] - Tree walk collecting `doc` directories and their help files
//! - [`builder`] - Glue producing a [`DocIndex`](crate::models::DocIndex) from configuration
//!
//! Filesystem errors are recovered locally: an unreadable root or subtree yields
//! no entries and the scan moves on.

pub mod builder;
pub mod roots;
pub mod scanner;

pub use builder::build_index;
pub use roots::resolve_roots;
pub use scanner::{DEFAULT_EXTENSIONS, DOC_DIR_NAME, EXCLUDED_DIR_NAME, scan};
