// src/main.rs — coopfold entry point

use std::path::Path;
use std::time::Duration;

use clap::Parser;

use coopfold::cli::run::run_command;
use coopfold::cli::Cli;
use coopfold::core::engine::Driver;
use coopfold::infra::config::Config;
use coopfold::infra::logger;

// Single-threaded on purpose: the driver's yields are what keep it responsive.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no config.toml)
    let config = if let Some(ref path) = cli.config {
        Config::load_from(Path::new(path))?
    } else {
        Config::load()?
    };

    // Initialize logging (respects COOPFOLD_LOG / RUST_LOG)
    logger::init_logging(&config.logging.level);

    let driver = Driver::new().with_timing(cli.timing(&config));
    let numbers = cli.input_numbers(std::io::stdin().lock())?;

    let outcome = run_command(
        &driver,
        &cli.command,
        numbers,
        Duration::from_millis(cli.work_ms),
    )
    .await?;
    println!("{}", outcome.render(cli.json)?);
    Ok(())
}
