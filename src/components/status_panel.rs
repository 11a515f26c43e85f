use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::constants::STATUS_CONTAINER_ID;
use crate::dom_utils::escape_html;
use crate::i18n::{tr, Language};
use crate::models::CurrentStatus;
use crate::state::APP_STATE;

/// Repaint the current-configuration panel from the state snapshot.
pub fn render(document: &Document) -> Result<(), JsValue> {
    let (language, status) = APP_STATE.with(|s| {
        let s = s.borrow();
        (s.language, s.status.clone())
    });

    let container = match document.get_element_by_id(STATUS_CONTAINER_ID) {
        Some(container) => container,
        None => return Ok(()),
    };

    match status {
        Some(status) => container.set_inner_html(&status_markup(language, &status)),
        None => container.set_inner_html(&format!(
            "<div class=\"loading\">{}</div>",
            tr(language, "loading")
        )),
    }
    Ok(())
}

fn status_markup(language: Language, status: &CurrentStatus) -> String {
    if !status.configured {
        return format!(
            "<div class=\"status-empty\"><p>{}</p><p>{}</p></div>",
            tr(language, "noConfigured"),
            tr(language, "pleaseSelect")
        );
    }

    let not_set = tr(language, "notSetValue");
    let value = |field: &Option<String>| {
        escape_html(field.as_deref().unwrap_or(not_set))
    };
    let row = |label: &str, value: String, extra_class: &str| {
        format!(
            "<div class=\"status-item\"><span class=\"status-label\">{}</span><span class=\"status-value{}\">{}</span></div>",
            label, extra_class, value
        )
    };

    let provider = escape_html(
        status
            .provider
            .as_deref()
            .unwrap_or(tr(language, "unknownProvider")),
    );

    let mut markup = String::new();
    markup.push_str(&row(tr(language, "statusBaseUrl"), value(&status.base_url), ""));
    markup.push_str(&row(tr(language, "statusMainModel"), value(&status.model), ""));
    markup.push_str(&row(tr(language, "statusFastModel"), value(&status.fast_model), ""));
    markup.push_str(&row(
        tr(language, "statusCurrentProvider"),
        provider,
        " status-provider",
    ));
    markup
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_status_renders_the_empty_hint() {
        let markup = status_markup(Language::En, &CurrentStatus::default());
        assert!(markup.contains("No API provider currently configured"));
        assert!(markup.contains("Please select a model to configure"));
    }

    #[test]
    fn configured_status_renders_every_field() {
        let status = CurrentStatus {
            configured: true,
            base_url: Some("https://api.example.com".to_string()),
            model: Some("claude-3-opus".to_string()),
            fast_model: None,
            provider: Some("claude3".to_string()),
        };
        let markup = status_markup(Language::En, &status);
        assert!(markup.contains("https://api.example.com"));
        assert!(markup.contains("claude-3-opus"));
        assert!(markup.contains("claude3"));
        // Missing fast model falls back to the localized placeholder.
        assert!(markup.contains("Not set"));
    }

    #[test]
    fn backend_values_are_escaped() {
        let status = CurrentStatus {
            configured: true,
            base_url: Some("<img src=x>".to_string()),
            model: None,
            fast_model: None,
            provider: None,
        };
        let markup = status_markup(Language::Zh, &status);
        assert!(!markup.contains("<img"));
        assert!(markup.contains("&lt;img"));
    }
}
