/// Update function for the search trigger view
///
/// Every state change happens here. Side effects are only described, as
/// commands, and carried out by the executor.

use crate::config::SearchMode;
use crate::tea::model::{
    FAILURE_TITLE, LAUNCH_REQUESTED_BODY, LAUNCH_REQUESTED_TITLE, SEARCH_COMPLETED_BODY,
    SEARCH_COMPLETED_TITLE,
};
use crate::tea::{ActionOutcome, Command, Message, Model, ToastLevel, UpdateResult};
use chrono::Local;

pub fn update(mut model: Model, message: Message) -> UpdateResult<Model> {
    match message {
        Message::Activate => activate(model),
        Message::Settled(outcome) => settle(model, outcome),
        Message::Tick => {
            model.toasts.update();
            if model.loading {
                model.advance_spinner();
            }
            UpdateResult::just_model(model)
        }
        Message::ToggleInstructions => {
            model.show_instructions = !model.show_instructions;
            UpdateResult::just_model(model)
        }
        Message::DismissToasts => {
            model.toasts.clear();
            UpdateResult::just_model(model)
        }
        Message::Quit => {
            model.should_quit = true;
            UpdateResult::with_command(model, Command::Quit)
        }
    }
}

fn activate(mut model: Model) -> UpdateResult<Model> {
    if !model.control_enabled() {
        tracing::debug!("Ignoring activation while an action is in flight");
        return UpdateResult::just_model(model);
    }

    model.loading = true;
    model.last_failure = None;
    model.spinner_frame = 0;
    model.activations += 1;

    tracing::info!("Activation #{} in {} mode", model.activations, model.mode);

    let command = match model.mode {
        SearchMode::Launch => Command::LaunchApp {
            url: model.app_url.clone(),
        },
        SearchMode::Search => Command::RunSearch,
    };

    UpdateResult::with_command(model, command)
}

fn settle(mut model: Model, outcome: ActionOutcome) -> UpdateResult<Model> {
    if !model.loading {
        tracing::debug!("Dropping outcome with no action in flight: {:?}", outcome);
        return UpdateResult::just_model(model);
    }

    match outcome {
        ActionOutcome::LaunchRequested { url } => {
            tracing::info!("Browser launch requested for {}", url);
            model.toasts.notify(
                LAUNCH_REQUESTED_TITLE,
                LAUNCH_REQUESTED_BODY,
                ToastLevel::Info,
            );
        }
        ActionOutcome::Found(text) => {
            tracing::info!("Search completed with {} characters", text.len());
            model.result = Some(text);
            model.completed_at = Some(Local::now());
            model.toasts.notify(
                SEARCH_COMPLETED_TITLE,
                SEARCH_COMPLETED_BODY,
                ToastLevel::Success,
            );
        }
        ActionOutcome::Failed(failure) => {
            tracing::warn!("Action failed ({}): {}", failure.kind(), failure);
            let body = model.failure_message();
            model.toasts.notify(FAILURE_TITLE, body, ToastLevel::Error);
            model.last_failure = Some(failure);
        }
    }

    model.loading = false;
    UpdateResult::just_model(model)
}
