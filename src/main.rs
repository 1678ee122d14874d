use anyhow::Result;
use clap::Parser;
use rusty_golf_payout::args::{Cli, load_config, run};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(Cli::parse())?;
    let output = run(&config)?;
    println!("{output}");
    Ok(())
}
