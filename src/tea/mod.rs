//! The Elm Architecture (TEA) loop behind the search trigger view
//!
//! All state lives in [`Model`]. Key presses and action outcomes arrive as
//! [`Message`]s, [`update`] turns them into a new model plus [`Command`]s, and
//! the [`CommandExecutor`] performs the side effects and reports back through
//! the message channel.

pub mod command;
pub mod message;
pub mod model;
pub mod update;

pub use command::{Command, CommandExecutor};
pub use message::{ActionOutcome, Message, ToastLevel};
pub use model::Model;
pub use update::update;

/// Result of processing a TEA update cycle
pub struct UpdateResult<M> {
    pub model: M,
    pub commands: Vec<Command>,
}

impl<M> UpdateResult<M> {
    pub fn just_model(model: M) -> Self {
        Self {
            model,
            commands: Vec::new(),
        }
    }

    pub fn with_command(model: M, command: Command) -> Self {
        Self {
            model,
            commands: vec![command],
        }
    }
}
