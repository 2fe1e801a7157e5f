pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod search;
pub mod tea;
pub mod theme;
pub mod ui;

pub use app::App;
pub use config::{Config, SearchMode};
pub use error::{ActionFailure, ConfigError};
