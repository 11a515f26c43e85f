use wasm_bindgen_test::*;

use crate::i18n::{fill, tr, Language};
use crate::messages::Message;
use crate::models::{ApiKeyEntry, ModelConfig};
use crate::state::AppState;
use crate::update::RenderEffect;
use std::collections::HashMap;

wasm_bindgen_test_configure!(run_in_browser);

fn model(id: &str) -> ModelConfig {
    ModelConfig {
        id: id.to_string(),
        name: format!("Model {id}"),
        description: "test".to_string(),
        base_url: "https://api.example.com".to_string(),
        api_key_env: "EXAMPLE_API_KEY".to_string(),
        model: "example-large".to_string(),
        fast_model: "example-small".to_string(),
    }
}

#[wasm_bindgen_test]
fn at_most_one_edit_form_is_open() {
    let mut state = AppState::new();
    state.dispatch(Message::ModelsLoaded(vec![model("a"), model("b"), model("c")]));

    state.dispatch(Message::OpenEditForm("a".to_string()));
    state.dispatch(Message::OpenEditForm("b".to_string()));
    state.dispatch(Message::OpenEditForm("c".to_string()));

    assert_eq!(state.editing_model_id.as_deref(), Some("c"));
}

#[wasm_bindgen_test]
fn key_listing_keeps_config_entries_first() {
    let entry = |from_config: bool, preview: Option<&str>| ApiKeyEntry {
        model_name: "m".to_string(),
        model_id: "m".to_string(),
        has_key: preview.is_some(),
        key_preview: preview.map(str::to_string),
        is_from_config: from_config,
    };
    let mut entries = HashMap::new();
    entries.insert("USER_B".to_string(), entry(false, None));
    entries.insert("CONFIG_Z".to_string(), entry(true, Some("sk-...9")));
    entries.insert("USER_A".to_string(), entry(false, Some("sk-...1")));
    entries.insert("CONFIG_A".to_string(), entry(true, None));

    let mut state = AppState::new();
    state.dispatch(Message::KeysLoaded(entries));

    let names: Vec<&str> = state
        .keys
        .as_ref()
        .unwrap()
        .iter()
        .map(|(env, _)| env.as_str())
        .collect();
    assert_eq!(names, ["CONFIG_A", "CONFIG_Z", "USER_A", "USER_B"]);
}

#[wasm_bindgen_test]
fn confirmation_text_follows_a_language_toggle_immediately() {
    let mut state = AppState::new();
    assert_eq!(state.language, Language::En);

    let effect = state.dispatch(Message::ToggleLanguage);
    assert_eq!(effect, RenderEffect::Language);

    // The very next confirmation must already be in the new language.
    let prompt = fill(tr(state.language, "deleteConfirm"), &["Claude 3", "claude3"]);
    assert!(prompt.contains("确定要删除模型"));
    assert!(prompt.contains("Claude 3"));
    assert!(prompt.contains("claude3"));
}

#[wasm_bindgen_test]
fn collections_start_unloaded_and_load_independently() {
    let mut state = AppState::new();
    assert!(state.status.is_none());
    assert!(state.models.is_none());
    assert!(state.keys.is_none());

    state.dispatch(Message::ModelsLoaded(vec![]));
    assert_eq!(state.models.as_ref().map(|m| m.len()), Some(0));
    assert!(state.status.is_none());
    assert!(state.keys.is_none());
}
