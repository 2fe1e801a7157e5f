//! External collaborators of the search trigger view
//!
//! The view never talks to a browser or the network directly. Launch mode goes
//! through a [`BrowserLauncher`], search mode through a [`SearchBackend`], so
//! both can be replaced in tests.

pub mod backend;
pub mod launcher;
pub mod result;

pub use backend::{HttpSearchBackend, SearchBackend};
pub use launcher::{BrowserLauncher, SystemBrowser};
pub use result::normalize_result_text;
