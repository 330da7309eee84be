use std::process::exit;

use flexi_logger::Logger;
use rusty_phonebook::prelude::{AppError, run_app};

fn init_logging() -> Result<flexi_logger::LoggerHandle, AppError> {
    // Logs go to stderr so listings on stdout stay clean.
    Ok(Logger::try_with_env_or_str("warn")?
        .log_to_stderr()
        .start()?)
}

fn main() {
    let _logger = match init_logging() {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Logging disabled: {e}");
            None
        }
    };

    if let Err(e) = run_app() {
        eprintln!("Error: {e}");
        exit(1);
    }
}
