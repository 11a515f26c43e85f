use std::cell::RefCell;

use crate::i18n::Language;
use crate::messages::Message;
use crate::models::{ApiKeyEntry, CurrentStatus, ModelConfig, TestOutcome};
use crate::update::{update, RenderEffect};

/// Lifecycle of the inline model test region.
#[derive(Clone, Debug, PartialEq)]
pub enum TestRun {
    Idle,
    Pending,
    Done(TestOutcome),
}

// Central application state. Collections are `None` until their first
// successful fetch so renderers can distinguish "still loading" from
// "loaded empty".
pub struct AppState {
    pub language: Language,
    pub status: Option<CurrentStatus>,
    pub models: Option<Vec<ModelConfig>>,
    pub keys: Option<Vec<(String, ApiKeyEntry)>>,
    /// Model row whose edit form is open; at most one at a time.
    pub editing_model_id: Option<String>,
    pub search_term: String,
    pub test_run: TestRun,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            language: Language::En,
            status: None,
            models: None,
            keys: None,
            editing_model_id: None,
            search_term: String::new(),
            test_run: TestRun::Idle,
        }
    }

    pub fn dispatch(&mut self, msg: Message) -> RenderEffect {
        update(self, msg)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

/// Route a message through the central state, then repaint whatever the
/// transition dirtied. The mutable borrow is dropped before any render work
/// so the view layer can take its own snapshot.
pub fn dispatch_global_message(msg: Message) {
    APP_STATE.with(|state_ref| {
        let mut state = state_ref.borrow_mut();
        let effect = state.dispatch(msg);
        drop(state);

        if let Err(e) = crate::views::apply_render_effect(effect) {
            web_sys::console::warn_1(
                &format!("Failed to refresh UI after message: {:?}", e).into(),
            );
        }
    });
}
