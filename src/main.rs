use anyhow::{Context, Result};
use clap::Parser;
use job_board::cli::{handle_command, Cli};
use job_board::config::AppConfig;
use job_board::logging;
use job_board::templates::TemplateLibrary;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path, &AppConfig::get_environment())?,
        None => AppConfig::load()?,
    };

    // Initialize logging before touching the catalog
    logging::init(&config)?;

    info!(
        "Environment: {}, default page size: {}",
        AppConfig::get_environment(),
        config.default_page_size
    );

    let library = match &config.catalog_path {
        Some(path) => TemplateLibrary::load(path)?,
        None => TemplateLibrary::builtin().context("Failed to load built-in catalog")?,
    };

    handle_command(cli, &config, &library)
}
