use std::path::PathBuf;

use clap::Parser;

use super::logging::LogDestination;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "applyflow",
    version,
    about = "Terminal front end for the applyflow job-application service"
)]
pub struct Cli {
    /// Base URL of the backend service
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    pub endpoint: String,

    /// Directory holding session state (the stored auth token)
    #[arg(long, default_value = ".")]
    pub state_dir: PathBuf,

    /// Log destination
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    /// Read commands from a file instead of stdin, then exit
    #[arg(long)]
    pub script: Option<PathBuf>,
}
