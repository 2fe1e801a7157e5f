//! Messages flowing into the update function

use crate::error::ActionFailure;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The user pressed the action control
    Activate,

    /// The external action finished, one way or another
    Settled(ActionOutcome),

    /// Periodic tick for the spinner and toast expiry
    Tick,

    /// Show or hide the setup instructions panel
    ToggleInstructions,

    /// Drop every visible notification
    DismissToasts,

    Quit,
}

/// How an activation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The browser was asked to open the app; nothing confirms it did
    LaunchRequested { url: String },

    /// The backend answered 2xx with this text
    Found(String),

    Failed(ActionFailure),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}
