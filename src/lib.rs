pub mod cli;
pub mod core;
pub mod providers;
pub mod store;

use crate::cli::menu::{Prompt, TerminalPrompt};
use crate::cli::session::Session;
use crate::core::config::AppConfig;
use crate::providers::static_rates::StaticRateProvider;
use crate::store::AssetStore;
use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, info};

/// Loads configuration and runs an interactive session on the terminal.
pub fn run(config_path: Option<&str>) -> Result<()> {
    info!("Asset tracker starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let mut prompt = TerminalPrompt::new();
    let mut out = console::Term::stdout();
    run_session(&config, &mut prompt, &mut out)
}

/// Opens the configured store and runs a session over the given input and output.
pub fn run_session<P: Prompt, W: Write>(
    config: &AppConfig,
    prompt: &mut P,
    out: &mut W,
) -> Result<()> {
    let store_path = config.store_path()?;
    let store = AssetStore::open(&store_path)
        .with_context(|| format!("Could not initialize asset store at {}", store_path.display()))?;
    info!(assets = store.len()?, "Asset store ready");

    let session = Session::new(store, StaticRateProvider::new());
    session.run(prompt, out)
}
