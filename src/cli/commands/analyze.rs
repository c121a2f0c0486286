use crate::cli::parser::Cli;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::logfile;
use crate::report;
use crate::ui::messages;
use crate::utils::time;

/// Default log name, matching the file the log writer produces.
const DEFAULT_LOG_FILE: &str = "iNetLog.csv";

/// Analyze one connection log and print the uptime report.
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1. Parse the optional date bounds
    //
    let (lower, upper) = match &cli.date_range {
        Some(range) => {
            let (start, end) = time::parse_bound_range(range)?;
            (Some(start), Some(end))
        }
        None => (None, None),
    };

    //
    // 2. Resolve the file to analyze
    //
    let path = match &cli.file {
        Some(file) => file.clone(),
        None => {
            messages::warning(format!(
                "No file to analyze provided. Assuming default '{DEFAULT_LOG_FILE}'"
            ));
            DEFAULT_LOG_FILE.to_string()
        }
    };

    //
    // 3. Read the log, dropping undecodable lines
    //
    let observations = logfile::load_log(&path)?;

    if cli.verbose {
        messages::info(format!(
            "Creating analysis from {} Internet connection entries.",
            observations.len()
        ));
    }

    //
    // 4. Analyze and print
    //
    let now = chrono::Local::now().naive_local();
    match Core::analyze(&observations, lower, upper, now) {
        Some(analysis) => println!("{}", report::render(&analysis.window, &analysis.totals)),
        None => messages::warning("No valid Internet log entries found."),
    }

    Ok(())
}
