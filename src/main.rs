//! inetlog-analyzer main entrypoint.

use inetlog_analyzer::errors::AppError;
use inetlog_analyzer::ui::messages;

fn main() {
    if let Err(e) = inetlog_analyzer::run() {
        match &e {
            // clap already rendered the help or usage text
            AppError::Usage(err) => {
                let _ = err.print();
            }
            other => messages::error(other),
        }
        std::process::exit(e.exit_code());
    }
}
