use std::process::ExitCode;

use vman::error::{EXIT_FAILURE, EXIT_USAGE, VmanError};

fn main() -> ExitCode {
    match vman::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("vman: {:#}", e);
            let code = e.downcast_ref::<VmanError>().map_or(EXIT_FAILURE, VmanError::exit_code);
            if code == EXIT_USAGE {
                eprintln!("Usage: vman [-e] TOPIC (see vman --help)");
            }
            ExitCode::from(code)
        }
    }
}
