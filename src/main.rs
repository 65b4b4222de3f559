//! tola-components - render site components and bundle their assets.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tola_components::cli::{self, Cli, Commands};
use tola_components::config::SiteConfig;
use tola_components::{log, logger};

fn main() {
    if let Err(e) = run() {
        log!("error"; "{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Render { args } => cli::render::render_components(args, &config),
        Commands::List => cli::list::list_components(&config),
    }
}
