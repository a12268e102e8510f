use anyhow::Result;
use asset_tracker::core::log::init_logging;
use clap::Parser;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long)]
    config_path: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = asset_tracker::run(cli.config_path.as_deref());

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
