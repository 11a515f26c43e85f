// src/views.rs
//
// Renders parts of the page from a snapshot of the central state. Each
// RenderEffect names the smallest region a state transition can dirty, so a
// keystroke in the search box never rebuilds the key list.
//
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Document;

use crate::components::{key_manager, model_list, status_panel, test_panel};
use crate::i18n;
use crate::state::APP_STATE;
use crate::storage;
use crate::update::RenderEffect;
use crate::utils::document;

pub fn apply_render_effect(effect: RenderEffect) -> Result<(), JsValue> {
    let document = document();
    match effect {
        RenderEffect::None => Ok(()),
        RenderEffect::Language => {
            let language = APP_STATE.with(|s| s.borrow().language);
            storage::save_language(language);

            // Static labels switch synchronously; collections repaint from
            // the cached snapshot so nothing flashes empty.
            apply_translations(&document);
            render_all(&document)?;

            // Values embedded in rendered text and confirmation templates
            // come from the backend - re-fetch so the next render and the
            // next dialog use fresh data.
            wasm_bindgen_futures::spawn_local(crate::network::api_client::refresh_dynamic_content());
            Ok(())
        }
        RenderEffect::Status => status_panel::render(&document),
        RenderEffect::Models => model_list::render(&document),
        RenderEffect::Keys => key_manager::render(&document),
        RenderEffect::EditForms => {
            model_list::apply_edit_visibility();
            Ok(())
        }
        RenderEffect::Filter => {
            model_list::apply_filter();
            Ok(())
        }
        RenderEffect::TestPanel => test_panel::render(&document),
    }
}

/// Repaint every dynamic region from the current snapshot.
pub fn render_all(document: &Document) -> Result<(), JsValue> {
    status_panel::render(document)?;
    model_list::render(document)?;
    key_manager::render(document)?;
    test_panel::render(document)
}

/// Walk every `[data-i18n]`-tagged element and swap in the current-language
/// string. Inputs and textareas receive placeholders, everything else text.
pub fn apply_translations(document: &Document) {
    let language = APP_STATE.with(|s| s.borrow().language);

    let nodes = match document.query_selector_all("[data-i18n]") {
        Ok(nodes) => nodes,
        Err(_) => return,
    };

    for index in 0..nodes.length() {
        let element = match nodes.item(index).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            Some(el) => el,
            None => continue,
        };
        let key = match element.get_attribute("data-i18n") {
            Some(key) => key,
            None => continue,
        };
        let Some(text) = i18n::lookup(language, &key) else {
            continue;
        };

        if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
            input.set_placeholder(text);
        } else if let Some(textarea) = element.dyn_ref::<web_sys::HtmlTextAreaElement>() {
            textarea.set_placeholder(text);
        } else {
            element.set_text_content(Some(text));
        }
    }
}
