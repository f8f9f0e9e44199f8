// src/bin/cli.rs
use clap::Parser;
use vnl_scrape::cli::{self, Cli};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    vnl_scrape::log::init();

    cli::run(Cli::parse())?;
    Ok(())
}
