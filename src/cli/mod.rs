pub mod commands;
pub mod dispatch;

pub use commands::{Cli, run};
pub use dispatch::{Action, EDIT_FLAG, Invocation, dispatch};
