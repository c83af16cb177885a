// src/bin/scrape.rs
use clap::Parser;
use icra_scrape::{cli, logger};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = logger::init() {
        eprintln!("Warning: file logging disabled: {e}");
    }
    cli::run_scrape(cli::ScrapeArgs::parse())
}
