//! Add-model form: open/close, collect, validate, reset. The form itself is
//! part of the static skeleton; submission is wired in `ui::events`.

use web_sys::Document;

use crate::constants::{
    ADD_DESC_INPUT, ADD_ENV_INPUT, ADD_FAST_INPUT, ADD_FORM_ID, ADD_ID_INPUT, ADD_MODEL_INPUT,
    ADD_NAME_INPUT, ADD_URL_INPUT,
};
use crate::dom_utils::{self, html_input, html_textarea};
use crate::models::{is_valid_model_id, ModelConfig};

pub fn open(document: &Document) {
    if let Some(form) = document.get_element_by_id(ADD_FORM_ID) {
        dom_utils::show(&form);
    }
    if let Some(input) = html_input(document, ADD_ID_INPUT) {
        let _ = input.focus();
    }
}

pub fn close(document: &Document) {
    if let Some(form) = document.get_element_by_id(ADD_FORM_ID) {
        dom_utils::hide(&form);
    }
}

pub fn reset(document: &Document) {
    for id in [
        ADD_ID_INPUT,
        ADD_NAME_INPUT,
        ADD_URL_INPUT,
        ADD_ENV_INPUT,
        ADD_MODEL_INPUT,
        ADD_FAST_INPUT,
    ] {
        if let Some(input) = html_input(document, id) {
            input.set_value("");
        }
    }
    if let Some(textarea) = html_textarea(document, ADD_DESC_INPUT) {
        textarea.set_value("");
    }
}

/// Read the form into a ModelConfig with the fast-model default applied.
/// Returns the i18n key of the first validation failure.
pub fn collect(document: &Document) -> Result<ModelConfig, &'static str> {
    let value = |id: &str| {
        html_input(document, id)
            .map(|input| input.value())
            .unwrap_or_default()
            .trim()
            .to_string()
    };
    let description = html_textarea(document, ADD_DESC_INPUT)
        .map(|t| t.value())
        .unwrap_or_default()
        .trim()
        .to_string();

    let config = ModelConfig {
        id: value(ADD_ID_INPUT),
        name: value(ADD_NAME_INPUT),
        description,
        base_url: value(ADD_URL_INPUT),
        api_key_env: value(ADD_ENV_INPUT),
        model: value(ADD_MODEL_INPUT),
        fast_model: value(ADD_FAST_INPUT),
    }
    .with_fast_model_default();

    validate_new(&config)?;
    Ok(config)
}

/// Field checks for a new configuration; presence first, then the id
/// character set.
pub fn validate_new(config: &ModelConfig) -> Result<(), &'static str> {
    if config.id.is_empty() || !config.has_required_fields() {
        return Err("requiredFields");
    }
    if !is_valid_model_id(&config.id) {
        return Err("invalidModelId");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(id: &str) -> ModelConfig {
        ModelConfig {
            id: id.to_string(),
            name: "Claude 3".to_string(),
            description: String::new(),
            base_url: "https://api.example.com".to_string(),
            api_key_env: "CLAUDE_API_KEY".to_string(),
            model: "claude-3-opus".to_string(),
            fast_model: String::new(),
        }
        .with_fast_model_default()
    }

    #[test]
    fn valid_draft_passes() {
        assert!(validate_new(&draft("claude3")).is_ok());
    }

    #[test]
    fn missing_fields_beat_the_charset_check() {
        let mut missing = draft("bad id");
        missing.name = String::new();
        assert_eq!(validate_new(&missing), Err("requiredFields"));
        assert_eq!(validate_new(&draft("")), Err("requiredFields"));
    }

    #[test]
    fn malformed_id_is_rejected_before_any_network_call() {
        assert_eq!(validate_new(&draft("bad id")), Err("invalidModelId"));
        assert_eq!(validate_new(&draft("claude/3")), Err("invalidModelId"));
    }
}
