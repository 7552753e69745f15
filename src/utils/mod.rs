pub mod environment;
pub mod paths;

pub use environment::{
    CANONICAL_EDITOR, default_root, editor_from_env, home_dir, select_editor,
};
pub use paths::{expand_tilde, format_path_with_tilde};
