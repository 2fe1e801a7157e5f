use anyhow::{anyhow, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};

use crate::config::Config;
use crate::events::EventHandler;
use crate::search::{BrowserLauncher, HttpSearchBackend, SearchBackend, SystemBrowser};
use crate::tea::{update, CommandExecutor, Message, Model};
use crate::theme::Theme;
use crate::ui::UI;

const TICK_RATE: Duration = Duration::from_millis(50);

pub struct App {
    model: Model,
    ui: UI,
    event_handler: EventHandler,
    executor: CommandExecutor,
    message_receiver: mpsc::UnboundedReceiver<Message>,
}

impl App {
    /// Build the view with the system browser and the HTTP search backend
    pub fn new(config: &Config) -> Result<Self> {
        let backend = HttpSearchBackend::from_config(config)
            .map_err(|e| anyhow!("Failed to set up search backend: {}", e))?;
        Ok(Self::with_collaborators(
            config,
            Arc::new(SystemBrowser),
            Arc::new(backend),
        ))
    }

    pub fn with_collaborators(
        config: &Config,
        launcher: Arc<dyn BrowserLauncher>,
        backend: Arc<dyn SearchBackend>,
    ) -> Self {
        let (message_sender, message_receiver) = mpsc::unbounded_channel();
        Self {
            model: Model::from_config(config),
            ui: UI::new(Theme::from_choice(config.theme)),
            event_handler: EventHandler::new(),
            executor: CommandExecutor::new(
                launcher,
                backend,
                config.request_timeout(),
                message_sender,
            ),
            message_receiver,
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Run one message through the update function and execute its commands
    pub fn dispatch(&mut self, message: Message) {
        let model = std::mem::take(&mut self.model);
        let result = update(model, message);
        self.model = result.model;
        self.executor.execute_all(result.commands);
    }

    /// Dispatch every message already waiting in the channel
    pub fn drain_messages(&mut self) {
        while let Ok(message) = self.message_receiver.try_recv() {
            self.dispatch(message);
        }
    }

    /// Wait for the next message from an executed command and dispatch it
    pub async fn process_next_message(&mut self) -> Option<Message> {
        let message = self.message_receiver.recv().await?;
        self.dispatch(message.clone());
        Some(message)
    }

    pub async fn run(&mut self) -> Result<()> {
        if !io::stdout().is_tty() {
            return Err(anyhow!(
                "flightdeck requires a terminal (TTY). Use `flightdeck launch` or `flightdeck search` for scripted use."
            ));
        }

        enable_raw_mode().map_err(|e| anyhow!("Failed to enable raw mode: {}", e))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| anyhow!("Failed to set up terminal: {}", e))?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal =
            Terminal::new(backend).map_err(|e| anyhow!("Failed to create terminal: {}", e))?;

        let result = self.run_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let mut last_tick = Instant::now();

        loop {
            self.drain_messages();

            terminal.draw(|f| self.ui.render(f, &self.model))?;

            if self.model.should_quit {
                tracing::info!("Leaving search view");
                return Ok(());
            }

            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if let Some(message) = self.event_handler.handle_key_event(key) {
                        self.dispatch(message);
                    }
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.dispatch(Message::Tick);
                last_tick = Instant::now();
            }

            // Let the search task and timers make progress
            tokio::task::yield_now().await;
        }
    }
}
