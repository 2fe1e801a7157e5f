//! State of the search trigger view

use crate::config::{Config, SearchMode};
use crate::error::ActionFailure;
use crate::ui::toast::ToastManager;
use chrono::{DateTime, Local};

pub const LAUNCH_REQUESTED_TITLE: &str = "Flight Search App Requested";
pub const LAUNCH_REQUESTED_BODY: &str =
    "A new browser tab was asked to open the app. If it stays blank, the Streamlit app is not running yet.";
pub const LAUNCH_FAILED_BODY: &str =
    "Please make sure the Streamlit app is running. Run 'streamlit run src/utils/flightSearch.py' in your terminal.";
pub const SEARCH_COMPLETED_TITLE: &str = "Search completed!";
pub const SEARCH_COMPLETED_BODY: &str = "The flight search service returned a result.";
pub const SEARCH_FAILED_BODY: &str =
    "Please make sure the flight search service is running and reachable, then try again.";
pub const FAILURE_TITLE: &str = "Error";

pub const SETUP_STEPS: [&str; 5] = [
    "Install Python 3.8 or higher",
    "Install required dependencies: pip install -r requirements.txt",
    "Install Playwright: playwright install",
    "Set your OpenAI API key in environment variables",
    "Run the Streamlit app: streamlit run src/utils/flightSearch.py",
];

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug)]
pub struct Model {
    pub mode: SearchMode,

    /// Address opened in launch mode
    pub app_url: String,

    /// Where search mode sends its request, for display only
    pub search_target: String,

    /// True strictly between activation and the action settling
    pub loading: bool,

    /// Text of the last successful search
    pub result: Option<String>,

    pub last_failure: Option<ActionFailure>,
    pub completed_at: Option<DateTime<Local>>,

    /// Number of activations that were accepted
    pub activations: u64,

    pub toasts: ToastManager,
    pub spinner_frame: usize,
    pub show_instructions: bool,
    pub should_quit: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Model {
    pub fn new(mode: SearchMode, app_url: impl Into<String>, search_target: impl Into<String>) -> Self {
        Self {
            mode,
            app_url: app_url.into(),
            search_target: search_target.into(),
            loading: false,
            result: None,
            last_failure: None,
            completed_at: None,
            activations: 0,
            toasts: ToastManager::new(),
            spinner_frame: 0,
            show_instructions: true,
            should_quit: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let search_target = match config.search_url() {
            Ok(url) => url.to_string(),
            Err(_) => format!("{}{}", config.backend_url, config.search_path),
        };
        Self::new(config.mode, config.app_url.clone(), search_target)
    }

    /// Whether the action control accepts activation
    pub fn control_enabled(&self) -> bool {
        !self.loading
    }

    pub fn button_label(&self) -> &'static str {
        match (self.mode, self.loading) {
            (SearchMode::Launch, false) => "Open Flight Search",
            (SearchMode::Launch, true) => "Opening Streamlit App...",
            (SearchMode::Search, false) => "Search Flights",
            (SearchMode::Search, true) => "Searching for flights...",
        }
    }

    pub fn spinner_symbol(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    pub fn advance_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    /// Instruction text shown above the control
    pub fn instructions(&self) -> String {
        match self.mode {
            SearchMode::Launch => format!(
                "Press Enter to open the Streamlit flight search application at {}. \
                 Make sure you have started the Streamlit server first by running: \
                 streamlit run src/utils/flightSearch.py",
                self.app_url
            ),
            SearchMode::Search => format!(
                "Press Enter to run a flight search. The request goes to {} and \
                 the text it returns is shown below.",
                self.search_target
            ),
        }
    }

    /// Fixed failure notification for the current mode
    pub fn failure_message(&self) -> &'static str {
        match self.mode {
            SearchMode::Launch => LAUNCH_FAILED_BODY,
            SearchMode::Search => SEARCH_FAILED_BODY,
        }
    }
}
