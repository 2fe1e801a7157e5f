/// Command system for the search trigger view
///
/// Commands describe the side effects requested by the update function. The
/// executor performs them and feeds the outcome back as a message.

use crate::error::ActionFailure;
use crate::search::{normalize_result_text, BrowserLauncher, SearchBackend};
use crate::tea::{ActionOutcome, Message};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the flight search app in a new browser tab
    LaunchApp { url: String },

    /// Send one request to the search backend
    RunSearch,

    /// Leave the view
    Quit,
}

/// Performs commands against the browser and the search backend.
///
/// The update function only issues a search while idle, so the executor keeps
/// a handle to the latest task. Dropping the executor aborts it.
pub struct CommandExecutor {
    launcher: Arc<dyn BrowserLauncher>,
    backend: Arc<dyn SearchBackend>,
    request_timeout: Duration,
    message_sender: mpsc::UnboundedSender<Message>,
    in_flight: Option<AbortHandle>,
}

impl CommandExecutor {
    pub fn new(
        launcher: Arc<dyn BrowserLauncher>,
        backend: Arc<dyn SearchBackend>,
        request_timeout: Duration,
        message_sender: mpsc::UnboundedSender<Message>,
    ) -> Self {
        Self {
            launcher,
            backend,
            request_timeout,
            message_sender,
            in_flight: None,
        }
    }

    /// Execute a command. Must be called from within a tokio runtime.
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::LaunchApp { url } => self.launch_app(url),
            Command::RunSearch => self.run_search(),
            Command::Quit => self.cancel_in_flight(),
        }
    }

    pub fn execute_all(&mut self, commands: Vec<Command>) {
        for command in commands {
            self.execute(command);
        }
    }

    /// Whether a search task is still running
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    /// Abort the running search, if any. Its outcome arrives as `Cancelled`.
    pub fn cancel_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            if !handle.is_finished() {
                tracing::info!("Cancelling in-flight search");
                handle.abort();
            }
        }
    }

    fn launch_app(&self, url: String) {
        let outcome = match self.launcher.open(&url) {
            Ok(()) => ActionOutcome::LaunchRequested { url },
            Err(failure) => ActionOutcome::Failed(failure),
        };
        send(&self.message_sender, Message::Settled(outcome));
    }

    fn run_search(&mut self) {
        let backend = Arc::clone(&self.backend);
        let timeout = self.request_timeout;
        let guard = CompletionGuard::new(self.message_sender.clone());

        tracing::info!("Starting search: {}", backend.describe());

        let handle = tokio::spawn(async move {
            let outcome = match tokio::time::timeout(timeout, backend.search()).await {
                Ok(Ok(body)) => ActionOutcome::Found(normalize_result_text(&body)),
                Ok(Err(failure)) => ActionOutcome::Failed(failure),
                Err(_) => ActionOutcome::Failed(ActionFailure::timed_out(timeout)),
            };
            guard.complete(outcome);
        });

        self.in_flight = Some(handle.abort_handle());
    }
}

impl Drop for CommandExecutor {
    fn drop(&mut self) {
        self.cancel_in_flight();
    }
}

/// Delivers exactly one outcome for a search task.
///
/// If the task is dropped before completing (aborted or panicked) the guard
/// reports `Cancelled`, so the view never stays in the loading state.
struct CompletionGuard {
    sender: Option<mpsc::UnboundedSender<Message>>,
}

impl CompletionGuard {
    fn new(sender: mpsc::UnboundedSender<Message>) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    fn complete(mut self, outcome: ActionOutcome) {
        if let Some(sender) = self.sender.take() {
            send(&sender, Message::Settled(outcome));
        }
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        if let Some(sender) = self.sender.take() {
            send(&sender, Message::Settled(ActionOutcome::Failed(ActionFailure::Cancelled)));
        }
    }
}

fn send(sender: &mpsc::UnboundedSender<Message>, message: Message) {
    if let Err(e) = sender.send(message) {
        // Receiver is gone once the view has shut down.
        tracing::debug!("Dropping message, view closed: {:?}", e.0);
    }
}
