use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::app::App;
use crate::config::{Config, SearchMode};
use crate::tea::model::LAUNCH_REQUESTED_BODY;
use crate::tea::Message;

/// flightdeck - terminal front end for the flight search assistant
#[derive(Parser, Debug)]
#[command(name = "flightdeck")]
#[command(about = "Open the flight search app or run a backend flight search from the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Action performed by the search control
    #[arg(long, global = true, value_enum)]
    pub mode: Option<SearchMode>,

    /// Address of the flight search app opened in launch mode
    #[arg(long, global = true)]
    pub app_url: Option<String>,

    /// Base address of the search backend
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Search request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the interactive view (default)
    Run,

    /// Open the flight search app in a browser tab and exit
    Launch,

    /// Run one backend search, print the result and exit
    Search,

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Whether this invocation takes over the terminal
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Commands::Run))
    }

    /// Apply command line overrides on top of the file configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(app_url) = &self.app_url {
            config.app_url = app_url.clone();
        }
        if let Some(backend_url) = &self.backend_url {
            config.backend_url = backend_url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout_secs = timeout;
        }
    }

    /// Load the config file and apply overrides
    pub async fn load_config(&self) -> Result<Config> {
        let path = self.config_path();
        let mut config = Config::load_from_file(&path)
            .await
            .with_context(|| format!("loading {}", path.display()))?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }
}

/// Runs the non-interactive subcommands.
///
/// The effective config is only built for commands that act on it, so
/// `config path` and `config init` keep working when the file is broken.
pub struct CliHandler<'a> {
    cli: &'a Cli,
    config_path: PathBuf,
}

impl<'a> CliHandler<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config_path: cli.config_path(),
        }
    }

    pub async fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Run => Err(anyhow!("`run` is handled by the interactive view")),
            Commands::Launch => {
                let mut app = App::new(&self.config_for(SearchMode::Launch).await?)?;
                println!("{}", activate_once(&mut app).await?);
                Ok(())
            }
            Commands::Search => {
                let mut app = App::new(&self.config_for(SearchMode::Search).await?)?;
                println!("{}", activate_once(&mut app).await?);
                Ok(())
            }
            Commands::Config(args) => self.handle_config(args.action).await,
        }
    }

    async fn config_for(&self, mode: SearchMode) -> Result<Config> {
        let config = self.cli.load_config().await?;
        Ok(Config { mode, ..config })
    }

    async fn handle_config(&self, action: ConfigAction) -> Result<()> {
        match action {
            ConfigAction::Show => {
                let config = self.cli.load_config().await?;
                print!("{}", toml::to_string_pretty(&config)?);
            }
            ConfigAction::Path => {
                println!("{}", self.config_path.display());
            }
            ConfigAction::Init { force } => {
                if self.config_path.exists() && !force {
                    return Err(anyhow!(
                        "{} already exists, pass --force to overwrite",
                        self.config_path.display()
                    ));
                }
                Config::default().save_to_file(&self.config_path).await?;
                println!("Wrote {}", self.config_path.display());
            }
        }
        Ok(())
    }
}

/// Activate the control once, wait for the outcome and describe it.
///
/// Success yields the text to print; failure yields the same notification the
/// interactive view shows.
pub async fn activate_once(app: &mut App) -> Result<String> {
    app.dispatch(Message::Activate);
    while app.model().loading {
        if app.process_next_message().await.is_none() {
            return Err(anyhow!("action ended without reporting an outcome"));
        }
    }

    let model = app.model();
    if let Some(failure) = &model.last_failure {
        tracing::debug!("Headless activation failed: {}", failure);
        return Err(anyhow!("{}", model.failure_message()));
    }

    Ok(match model.mode {
        SearchMode::Launch => LAUNCH_REQUESTED_BODY.to_string(),
        SearchMode::Search => model.result.clone().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_interactive() {
        let cli = Cli::parse_from(["flightdeck"]);
        assert!(cli.is_interactive());
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_overrides_apply() {
        let cli = Cli::parse_from([
            "flightdeck",
            "search",
            "--mode",
            "search",
            "--backend-url",
            "http://127.0.0.1:9000",
            "--timeout",
            "3",
        ]);
        assert!(!cli.is_interactive());

        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.mode, SearchMode::Search);
        assert_eq!(config.backend_url, "http://127.0.0.1:9000");
        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(config.app_url, "http://localhost:8501");
    }

    #[test]
    fn test_config_subcommand_parses() {
        let cli = Cli::parse_from(["flightdeck", "config", "init", "--force"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config(ConfigArgs {
                action: ConfigAction::Init { force: true }
            }))
        ));
    }

    fn cli_with_config(path: &std::path::Path, args: &[&str]) -> Cli {
        let mut argv = vec!["flightdeck", "--config", path.to_str().unwrap()];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[tokio::test]
    async fn test_init_force_repairs_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "request_timeout_secs = 0\n").unwrap();

        let broken = cli_with_config(&path, &["config", "show"]);
        assert!(broken.load_config().await.is_err());

        let path_cli = cli_with_config(&path, &["config", "path"]);
        let command = path_cli.command.clone().unwrap();
        CliHandler::new(&path_cli).handle_command(command).await.unwrap();

        let init = cli_with_config(&path, &["config", "init", "--force"]);
        let command = init.command.clone().unwrap();
        CliHandler::new(&init).handle_command(command).await.unwrap();

        let repaired = Config::load_from_file(&path).await.unwrap();
        assert_eq!(repaired, Config::default());
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "mode = \"search\"\n").unwrap();

        let init = cli_with_config(&path, &["config", "init"]);
        let command = init.command.clone().unwrap();
        assert!(CliHandler::new(&init).handle_command(command).await.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "mode = \"search\"\n");
    }
}
