use clap::Parser;

/// Command-line interface definition for inetlog-analyzer
/// CLI application to summarize connectivity uptime from a connection log
#[derive(Parser)]
#[command(
    name = "inetlog-analyzer",
    version = env!("CARGO_PKG_VERSION"),
    about = "Analyze an Internet connection log from iNetLogger and print an uptime summary",
    long_about = None
)]
pub struct Cli {
    /// Be extra verbose in analysis result
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Date range bounding the analysis window, in format MM/DD/YYYY-MM/DD/YYYY
    #[arg(short = 'd', value_name = "START-END")]
    pub date_range: Option<String>,

    /// Connection log to analyze (defaults to 'iNetLog.csv' with a warning)
    #[arg(value_name = "FILE")]
    pub file: Option<String>,
}
