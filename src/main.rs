use anyhow::{Context, Result};
use clap::Parser;
use flightdeck::app::App;
use flightdeck::cli::{Cli, CliHandler};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing::Level;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    match cli.command.clone() {
        Some(command) if !cli.is_interactive() => {
            CliHandler::new(&cli).handle_command(command).await
        }
        _ => {
            let config = cli.load_config().await?;
            let mut app = App::new(&config)?;
            app.run().await
        }
    }
}

/// The interactive view owns stdout, so it logs to a file. Headless commands
/// log to stderr.
fn init_tracing(cli: &Cli) -> Result<()> {
    let level = if cli.debug { Level::DEBUG } else { Level::INFO };

    if cli.is_interactive() {
        let log_dir = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("flightdeck");
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("creating {}", log_dir.display()))?;

        let log_path = log_dir.join("flightdeck.log");
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("opening {}", log_path.display()))?;

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(if cli.debug { Level::DEBUG } else { Level::WARN })
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}
