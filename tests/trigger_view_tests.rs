use async_trait::async_trait;
use flightdeck::error::{ActionFailure, ActionResult};
use flightdeck::search::{BrowserLauncher, SearchBackend};
use flightdeck::tea::model::{
    LAUNCH_FAILED_BODY, LAUNCH_REQUESTED_BODY, LAUNCH_REQUESTED_TITLE, SEARCH_COMPLETED_TITLE,
    SEARCH_FAILED_BODY,
};
use flightdeck::tea::{ActionOutcome, Message, ToastLevel};
use flightdeck::{App, Config, SearchMode};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Records every URL it is asked to open
#[derive(Default)]
struct RecordingBrowser {
    opened: Mutex<Vec<String>>,
    fail: bool,
}

impl BrowserLauncher for RecordingBrowser {
    fn open(&self, url: &str) -> ActionResult<()> {
        self.opened.lock().unwrap().push(url.to_string());
        if self.fail {
            Err(ActionFailure::launch_failed("no display"))
        } else {
            Ok(())
        }
    }
}

/// Answers every search with the same scripted response
struct ScriptedBackend {
    response: ActionResult<String>,
    calls: AtomicUsize,
}

impl ScriptedBackend {
    fn new(response: ActionResult<String>) -> Arc<Self> {
        Arc::new(Self {
            response,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl SearchBackend for ScriptedBackend {
    async fn search(&self) -> ActionResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.response.clone()
    }

    fn describe(&self) -> String {
        "scripted".to_string()
    }
}

/// Never answers
struct HangingBackend;

#[async_trait]
impl SearchBackend for HangingBackend {
    async fn search(&self) -> ActionResult<String> {
        std::future::pending().await
    }

    fn describe(&self) -> String {
        "hanging".to_string()
    }
}

fn search_app(backend: Arc<ScriptedBackend>) -> App {
    let config = Config {
        mode: SearchMode::Search,
        ..Config::default()
    };
    App::with_collaborators(&config, Arc::new(RecordingBrowser::default()), backend)
}

fn launch_app(browser: Arc<RecordingBrowser>) -> App {
    App::with_collaborators(
        &Config::default(),
        browser,
        ScriptedBackend::new(Ok(String::new())),
    )
}

#[tokio::test]
async fn test_loading_is_set_on_activation_and_cleared_on_success() {
    let mut app = search_app(ScriptedBackend::new(Ok("Flight found: $450".to_string())));

    app.dispatch(Message::Activate);
    assert!(app.model().loading);
    assert!(!app.model().control_enabled());

    app.process_next_message().await.unwrap();
    assert!(!app.model().loading);
}

#[tokio::test]
async fn test_successful_search_shows_text_and_success_toast() {
    let mut app = search_app(ScriptedBackend::new(Ok("Flight found: $450".to_string())));

    app.dispatch(Message::Activate);
    let settled = app.process_next_message().await.unwrap();
    assert_eq!(
        settled,
        Message::Settled(ActionOutcome::Found("Flight found: $450".to_string()))
    );

    let model = app.model();
    assert_eq!(model.result.as_deref(), Some("Flight found: $450"));
    let toast = model.toasts.toasts().back().unwrap();
    assert_eq!(toast.level, ToastLevel::Success);
    assert_eq!(toast.title, SEARCH_COMPLETED_TITLE);
}

#[tokio::test]
async fn test_bad_status_shows_failure_and_leaves_result_unset() {
    let mut app = search_app(ScriptedBackend::new(Err(ActionFailure::bad_status(502))));

    app.dispatch(Message::Activate);
    app.process_next_message().await.unwrap();

    let model = app.model();
    assert!(!model.loading);
    assert!(model.result.is_none());
    assert_eq!(model.last_failure, Some(ActionFailure::bad_status(502)));
    let toast = model.toasts.toasts().back().unwrap();
    assert_eq!(toast.level, ToastLevel::Error);
    assert_eq!(toast.message, SEARCH_FAILED_BODY);
}

#[tokio::test]
async fn test_transport_failure_shows_same_notification() {
    let mut bad_status = search_app(ScriptedBackend::new(Err(ActionFailure::bad_status(404))));
    let mut unreachable = search_app(ScriptedBackend::new(Err(ActionFailure::unreachable(
        "connection refused",
    ))));

    for app in [&mut bad_status, &mut unreachable] {
        app.dispatch(Message::Activate);
        app.process_next_message().await.unwrap();
    }

    let first = bad_status.model().toasts.toasts().back().unwrap();
    let second = unreachable.model().toasts.toasts().back().unwrap();
    assert_eq!(first.title, second.title);
    assert_eq!(first.message, second.message);
    assert_ne!(
        bad_status.model().last_failure,
        unreachable.model().last_failure
    );
}

#[tokio::test]
async fn test_launch_opens_app_url_once_per_activation() {
    let browser = Arc::new(RecordingBrowser::default());
    let mut app = launch_app(browser.clone());

    for expected in 1..=3 {
        app.dispatch(Message::Activate);
        assert!(app.model().loading);
        app.process_next_message().await.unwrap();
        assert!(!app.model().loading);
        assert_eq!(browser.opened.lock().unwrap().len(), expected);
    }

    let opened = browser.opened.lock().unwrap();
    assert!(opened.iter().all(|url| url == "http://localhost:8501"));

    let model = app.model();
    assert!(model.result.is_none());
    assert_eq!(
        model.toasts.toasts().back().unwrap().title,
        LAUNCH_REQUESTED_TITLE
    );
}

#[tokio::test]
async fn test_launch_failure_uses_streamlit_hint() {
    let browser = Arc::new(RecordingBrowser {
        opened: Mutex::new(Vec::new()),
        fail: true,
    });
    let mut app = launch_app(browser);

    app.dispatch(Message::Activate);
    app.process_next_message().await.unwrap();

    let model = app.model();
    assert!(!model.loading);
    assert_eq!(model.toasts.toasts().back().unwrap().message, LAUNCH_FAILED_BODY);
}

#[tokio::test]
async fn test_control_can_be_reactivated_after_any_outcome() {
    let responses = [
        Ok("Flight found: $450".to_string()),
        Err(ActionFailure::bad_status(500)),
        Err(ActionFailure::unreachable("refused")),
        Err(ActionFailure::malformed_body("invalid utf-8")),
    ];

    for response in responses {
        let backend = ScriptedBackend::new(response);
        let mut app = search_app(backend.clone());

        for _ in 0..2 {
            assert!(app.model().control_enabled());
            app.dispatch(Message::Activate);
            app.process_next_message().await.unwrap();
        }

        assert!(app.model().control_enabled());
        assert_eq!(backend.calls.load(Ordering::SeqCst), 2);
    }
}

#[tokio::test]
async fn test_activation_while_loading_sends_no_second_request() {
    let backend = ScriptedBackend::new(Ok("Flight found: $450".to_string()));
    let mut app = search_app(backend.clone());

    app.dispatch(Message::Activate);
    app.dispatch(Message::Activate);
    app.process_next_message().await.unwrap();

    assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    assert_eq!(app.model().activations, 1);
    assert!(!app.model().loading);
}

#[tokio::test]
async fn test_headless_search_returns_text() {
    let mut app = search_app(ScriptedBackend::new(Ok("Flight found: $450".to_string())));
    let text = flightdeck::cli::activate_once(&mut app).await.unwrap();
    assert_eq!(text, "Flight found: $450");
}

#[tokio::test]
async fn test_headless_search_failure_is_an_error() {
    let mut app = search_app(ScriptedBackend::new(Err(ActionFailure::bad_status(503))));
    let err = flightdeck::cli::activate_once(&mut app).await.unwrap_err();
    assert_eq!(err.to_string(), SEARCH_FAILED_BODY);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_rapid_reactivation_never_sticks_loading() {
    let backend = ScriptedBackend::new(Ok("Flight found: $450".to_string()));
    let mut app = search_app(backend.clone());

    for iteration in 0..2_000 {
        app.dispatch(Message::Activate);
        assert!(app.model().loading, "iteration {}", iteration);

        let settled = tokio::time::timeout(Duration::from_secs(2), app.process_next_message())
            .await
            .unwrap_or_else(|_| panic!("iteration {}: no outcome delivered", iteration));
        assert!(settled.is_some());
        assert!(!app.model().loading, "iteration {}", iteration);
    }

    assert_eq!(backend.calls.load(Ordering::SeqCst), 2_000);
}

#[tokio::test]
async fn test_quit_cancels_in_flight_search() {
    let config = Config {
        mode: SearchMode::Search,
        ..Config::default()
    };
    let mut app = App::with_collaborators(
        &config,
        Arc::new(RecordingBrowser::default()),
        Arc::new(HangingBackend),
    );

    app.dispatch(Message::Activate);
    assert!(app.model().loading);

    app.dispatch(Message::Quit);
    assert!(app.model().should_quit);

    let settled = tokio::time::timeout(Duration::from_secs(2), app.process_next_message())
        .await
        .unwrap();
    assert_eq!(
        settled,
        Some(Message::Settled(ActionOutcome::Failed(ActionFailure::Cancelled)))
    );
    assert!(!app.model().loading);
    assert!(app.model().result.is_none());
}

#[tokio::test]
async fn test_headless_launch_returns_requested_notice() {
    let browser = Arc::new(RecordingBrowser::default());
    let mut app = launch_app(browser.clone());

    let text = flightdeck::cli::activate_once(&mut app).await.unwrap();
    assert_eq!(text, LAUNCH_REQUESTED_BODY);
    assert_eq!(
        browser.opened.lock().unwrap().as_slice(),
        ["http://localhost:8501".to_string()]
    );
}
