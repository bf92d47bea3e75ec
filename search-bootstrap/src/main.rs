//! Search Bootstrap
//!
//! Opens the Elasticsearch connection described by a settings file or the
//! environment and exits non-zero if no ready client could be created.

use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::info;

use search_bootstrap::{exit_code, logging, run, BootstrapError, Settings};

#[derive(Parser)]
#[command(name = "search-bootstrap")]
#[command(about = "Open and verify the Elasticsearch connection", long_about = None)]
struct Cli {
    /// JSON settings file. Environment variables are read when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init_tracing(cli.json_logs);

    let settings = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "Loading settings file");
            Settings::from_json_file(path)
        }
        None => Settings::from_env(),
    };

    let result = match settings {
        Ok(settings) => run(settings).await,
        Err(e) => Err(BootstrapError::from(e)),
    };

    let code = exit_code(&result);
    if code != 0 {
        process::exit(code);
    }
}
