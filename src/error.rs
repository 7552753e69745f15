use thiserror::Error;

/// Exit status for missing or malformed arguments
pub const EXIT_USAGE: u8 = 2;
/// Exit status for every other failure
pub const EXIT_FAILURE: u8 = 1;

/// Failures reported to the user by the command line front end
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VmanError {
    #[error("not enough arguments")]
    NotEnoughArguments,

    #[error("-e: not enough arguments")]
    MissingEditTarget,

    #[error("{flag}: unexpected argument '{arg}'")]
    UnexpectedArgument { flag: String, arg: String },

    #[error("No manual entry for {name}")]
    NoManualEntry { name: String },

    #[error("failed to launch editor '{program}': {reason}")]
    EditorLaunch { program: String, reason: String },
}

impl VmanError {
    pub fn exit_code(&self) -> u8 {
        match self {
            VmanError::NotEnoughArguments
            | VmanError::MissingEditTarget
            | VmanError::UnexpectedArgument { .. } => EXIT_USAGE,
            VmanError::NoManualEntry { .. } | VmanError::EditorLaunch { .. } => EXIT_FAILURE,
        }
    }
}
