// src/update.rs
//
// Pure state transitions. `update` mutates the snapshot and names the
// smallest page region the transition dirtied; all DOM work happens in the
// render layer afterwards.
//
use crate::messages::Message;
use crate::models::order_key_entries;
use crate::state::{AppState, TestRun};

/// Which part of the page must be repainted after a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderEffect {
    None,
    /// Static labels change synchronously; collections re-render from the
    /// cached snapshot and a background re-fetch follows.
    Language,
    Status,
    Models,
    Keys,
    EditForms,
    Filter,
    TestPanel,
}

pub fn update(state: &mut AppState, msg: Message) -> RenderEffect {
    match msg {
        Message::ToggleLanguage => {
            state.language = state.language.toggled();
            RenderEffect::Language
        }
        Message::StatusLoaded(status) => {
            state.status = Some(status);
            RenderEffect::Status
        }
        Message::ModelsLoaded(models) => {
            // A rebuilt list invalidates an open edit form whose model no
            // longer exists.
            if let Some(editing) = &state.editing_model_id {
                if !models.iter().any(|m| &m.id == editing) {
                    state.editing_model_id = None;
                }
            }
            state.models = Some(models);
            RenderEffect::Models
        }
        Message::KeysLoaded(entries) => {
            state.keys = Some(order_key_entries(entries));
            RenderEffect::Keys
        }
        Message::OpenEditForm(id) => {
            state.editing_model_id = Some(id);
            RenderEffect::EditForms
        }
        Message::CloseEditForm => {
            state.editing_model_id = None;
            RenderEffect::EditForms
        }
        Message::SearchChanged(term) => {
            state.search_term = term;
            RenderEffect::Filter
        }
        Message::TestStarted => {
            state.test_run = TestRun::Pending;
            RenderEffect::TestPanel
        }
        Message::TestFinished(outcome) => {
            state.test_run = TestRun::Done(outcome);
            RenderEffect::TestPanel
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::models::{ApiKeyEntry, ModelConfig, TestOutcome};
    use std::collections::HashMap;

    fn model(id: &str) -> ModelConfig {
        ModelConfig {
            id: id.to_string(),
            name: format!("Model {id}"),
            description: String::new(),
            base_url: "https://api.example.com".to_string(),
            api_key_env: "EXAMPLE_API_KEY".to_string(),
            model: "example-large".to_string(),
            fast_model: "example-small".to_string(),
        }
    }

    #[test]
    fn opening_an_edit_form_closes_the_previous_one() {
        let mut state = AppState::new();
        state.models = Some(vec![model("a"), model("b")]);

        assert_eq!(
            update(&mut state, Message::OpenEditForm("a".to_string())),
            RenderEffect::EditForms
        );
        assert_eq!(state.editing_model_id.as_deref(), Some("a"));

        update(&mut state, Message::OpenEditForm("b".to_string()));
        assert_eq!(state.editing_model_id.as_deref(), Some("b"));

        update(&mut state, Message::CloseEditForm);
        assert_eq!(state.editing_model_id, None);
    }

    #[test]
    fn reloaded_model_list_drops_stale_edit_state() {
        let mut state = AppState::new();
        update(&mut state, Message::OpenEditForm("gone".to_string()));
        update(&mut state, Message::ModelsLoaded(vec![model("kept")]));
        assert_eq!(state.editing_model_id, None);

        update(&mut state, Message::OpenEditForm("kept".to_string()));
        update(&mut state, Message::ModelsLoaded(vec![model("kept")]));
        assert_eq!(state.editing_model_id.as_deref(), Some("kept"));
    }

    #[test]
    fn loaded_keys_are_stored_pre_ordered() {
        let entry = |from_config: bool| ApiKeyEntry {
            model_name: String::new(),
            model_id: String::new(),
            has_key: false,
            key_preview: None,
            is_from_config: from_config,
        };
        let mut entries = HashMap::new();
        entries.insert("B_KEY".to_string(), entry(false));
        entries.insert("A_KEY".to_string(), entry(false));
        entries.insert("Z_KEY".to_string(), entry(true));

        let mut state = AppState::new();
        update(&mut state, Message::KeysLoaded(entries));

        let names: Vec<&str> = state
            .keys
            .as_ref()
            .unwrap()
            .iter()
            .map(|(env, _)| env.as_str())
            .collect();
        assert_eq!(names, ["Z_KEY", "A_KEY", "B_KEY"]);
    }

    #[test]
    fn language_toggle_flips_and_asks_for_relabel() {
        let mut state = AppState::new();
        assert_eq!(state.language, Language::En);
        assert_eq!(
            update(&mut state, Message::ToggleLanguage),
            RenderEffect::Language
        );
        assert_eq!(state.language, Language::Zh);
        update(&mut state, Message::ToggleLanguage);
        assert_eq!(state.language, Language::En);
    }

    #[test]
    fn search_term_is_tracked_without_rebuilding_collections() {
        let mut state = AppState::new();
        assert_eq!(
            update(&mut state, Message::SearchChanged("claude".to_string())),
            RenderEffect::Filter
        );
        assert_eq!(state.search_term, "claude");
    }

    #[test]
    fn test_lifecycle_tracks_outcome() {
        let mut state = AppState::new();
        assert_eq!(state.test_run, TestRun::Idle);

        update(&mut state, Message::TestStarted);
        assert_eq!(state.test_run, TestRun::Pending);

        let outcome = TestOutcome::failure("boom".to_string());
        update(&mut state, Message::TestFinished(outcome.clone()));
        assert_eq!(state.test_run, TestRun::Done(outcome));
    }
}
