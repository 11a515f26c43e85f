// src/messages.rs
//
// The events that can occur in the UI. Every state transition goes through
// one of these via `state::dispatch_global_message`.
//
use crate::models::{ApiKeyEntry, CurrentStatus, ModelConfig, TestOutcome};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub enum Message {
    // Language
    ToggleLanguage,

    // Collections arriving from the backend
    StatusLoaded(CurrentStatus),
    ModelsLoaded(Vec<ModelConfig>),
    KeysLoaded(HashMap<String, ApiKeyEntry>),

    // Per-row edit mode (mutually exclusive across rows)
    OpenEditForm(String),
    CloseEditForm,

    // Client-side model search
    SearchChanged(String),

    // Inline test run lifecycle
    TestStarted,
    TestFinished(TestOutcome),
}
