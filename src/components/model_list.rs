//! Model configuration cards: rendering, per-row handlers, edit forms and
//! the client-side search filter.
//!
//! Rendered rows are tracked in an explicit id -> handle registry so
//! edit-form toggling and the filter never re-derive element ids from
//! strings.

use std::cell::RefCell;
use std::collections::HashMap;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, MouseEvent};

use crate::constants::MODELS_CONTAINER_ID;
use crate::dom_utils::{self, BusyTarget};
use crate::i18n::{fill, tr, Language};
use crate::messages::Message;
use crate::models::ModelConfig;
use crate::network::api_client::{self, ApiClient};
use crate::state::{dispatch_global_message, APP_STATE};
use crate::toast;
use crate::utils;

/// Handles for one rendered model row.
struct ModelRow {
    card: Element,
    edit_form: Element,
    /// Lower-cased id + name + info text; the filter corpus for this row.
    haystack: String,
}

thread_local! {
    static MODEL_ROWS: RefCell<HashMap<String, ModelRow>> = RefCell::new(HashMap::new());
}

/// Rebuild the card list from the state snapshot, then re-apply edit
/// visibility and the current search term.
pub fn render(document: &Document) -> Result<(), JsValue> {
    let (language, models, editing, search_term) = APP_STATE.with(|s| {
        let s = s.borrow();
        (
            s.language,
            s.models.clone(),
            s.editing_model_id.clone(),
            s.search_term.clone(),
        )
    });

    let container = match document.get_element_by_id(MODELS_CONTAINER_ID) {
        Some(container) => container,
        None => return Ok(()),
    };
    container.set_inner_html("");
    MODEL_ROWS.with(|rows| rows.borrow_mut().clear());

    let models = match models {
        Some(models) => models,
        None => {
            container.set_inner_html(&format!(
                "<div class=\"loading\">{}</div>",
                tr(language, "loading")
            ));
            return Ok(());
        }
    };
    if models.is_empty() {
        container.set_inner_html(&format!(
            "<div class=\"loading\">{}</div>",
            tr(language, "noModels")
        ));
        return Ok(());
    }

    for model in &models {
        let row = build_row(document, language, model)?;
        container.append_child(&row.card)?;
        MODEL_ROWS.with(|rows| rows.borrow_mut().insert(model.id.clone(), row));
    }

    apply_edit_visibility_for(editing.as_deref());
    apply_filter_term(&search_term);
    Ok(())
}

fn build_row(document: &Document, language: Language, model: &ModelConfig) -> Result<ModelRow, JsValue> {
    let card = document.create_element("div")?;
    card.set_class_name("model-card");
    card.set_attribute("data-model-id", &model.id)?;

    let title = document.create_element("h3")?;
    title.set_text_content(Some(&model.name));
    card.append_child(&title)?;

    let description = if model.description.trim().is_empty() {
        tr(language, "noDescription").to_string()
    } else {
        model.description.clone()
    };
    let models_line = format!("{} / {}", model.model, model.fast_model);

    let info = document.create_element("div")?;
    info.set_class_name("model-info");
    let info_lines = [
        (tr(language, "description"), description.as_str()),
        (tr(language, "api"), model.base_url.as_str()),
        (tr(language, "environmentVar"), model.api_key_env.as_str()),
        (tr(language, "models"), models_line.as_str()),
    ];
    for (label, value) in info_lines {
        let line = document.create_element("span")?;
        let strong = document.create_element("strong")?;
        strong.set_text_content(Some(label));
        line.append_child(&strong)?;
        line.append_child(&document.create_text_node(&format!(" {}", value)))?;
        info.append_child(&line)?;
    }
    card.append_child(&info)?;

    let buttons = document.create_element("div")?;
    buttons.set_class_name("button-group");

    // Switch
    let switch_btn = make_button(document, "btn btn-primary", tr(language, "switchToModel"))?;
    {
        let model_id = model.id.clone();
        let btn: HtmlElement = switch_btn.clone().unchecked_into();
        let on_click = Closure::wrap(Box::new(move |_: MouseEvent| {
            let model_id = model_id.clone();
            let btn = btn.clone();
            spawn_local(async move {
                if ApiClient::switch_model(&model_id, BusyTarget::Control(btn))
                    .await
                    .is_ok()
                {
                    let language = APP_STATE.with(|s| s.borrow().language);
                    toast::success(&fill(tr(language, "switchSuccess"), &[&model_id]));
                    api_client::load_status().await;
                }
            });
        }) as Box<dyn FnMut(_)>);
        switch_btn.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    buttons.append_child(&switch_btn)?;

    // Edit
    let edit_btn = make_button(document, "btn btn-warning", tr(language, "edit"))?;
    {
        let model_id = model.id.clone();
        let on_click = Closure::wrap(Box::new(move |_: MouseEvent| {
            dispatch_global_message(Message::OpenEditForm(model_id.clone()));
        }) as Box<dyn FnMut(_)>);
        edit_btn.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    buttons.append_child(&edit_btn)?;

    // Delete - confirmation names the target in the current language.
    let delete_btn = make_button(document, "btn btn-danger", tr(language, "delete"))?;
    {
        let model_id = model.id.clone();
        let model_name = model.name.clone();
        let btn: HtmlElement = delete_btn.clone().unchecked_into();
        let on_click = Closure::wrap(Box::new(move |_: MouseEvent| {
            let language = APP_STATE.with(|s| s.borrow().language);
            let prompt = fill(tr(language, "deleteConfirm"), &[&model_name, &model_id]);
            if !utils::confirm(&prompt) {
                return;
            }
            let model_id = model_id.clone();
            let model_name = model_name.clone();
            let btn = btn.clone();
            spawn_local(async move {
                if ApiClient::delete_model(&model_id, BusyTarget::Control(btn))
                    .await
                    .is_ok()
                {
                    let language = APP_STATE.with(|s| s.borrow().language);
                    toast::success(&fill(tr(language, "deleteSuccess"), &[&model_name]));
                    api_client::refresh_models_and_status().await;
                }
            });
        }) as Box<dyn FnMut(_)>);
        delete_btn.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    buttons.append_child(&delete_btn)?;
    card.append_child(&buttons)?;

    let edit_form = build_edit_form(document, language, model)?;
    card.append_child(&edit_form)?;

    let haystack = build_haystack(
        &model.id,
        &model.name,
        &[
            &description,
            &model.base_url,
            &model.api_key_env,
            &models_line,
        ],
    );

    Ok(ModelRow {
        card,
        edit_form,
        haystack,
    })
}

/// Inline edit form, hidden until the row enters edit mode. The id is
/// immutable, so the form carries no id field - it rides along in the PUT
/// body instead.
fn build_edit_form(document: &Document, language: Language, model: &ModelConfig) -> Result<Element, JsValue> {
    let form = document.create_element("div")?;
    form.set_class_name("edit-form");
    dom_utils::hide(&form);

    let heading = document.create_element("h4")?;
    heading.set_text_content(Some(tr(language, "editModelTitle")));
    form.append_child(&heading)?;

    let name = labeled_input(document, &form, tr(language, "displayNameLabel"), "text", &model.name)?;
    let desc = labeled_textarea(document, &form, tr(language, "descriptionLabel"), &model.description)?;
    let url = labeled_input(document, &form, tr(language, "baseUrlLabel"), "url", &model.base_url)?;
    let env = labeled_input(document, &form, tr(language, "apiKeyEnvLabel"), "text", &model.api_key_env)?;
    let main = labeled_input(document, &form, tr(language, "mainModelLabel"), "text", &model.model)?;
    let fast = labeled_input(document, &form, tr(language, "fastModelLabel"), "text", &model.fast_model)?;

    let buttons = document.create_element("div")?;
    buttons.set_class_name("button-group");

    let save_btn = make_button(document, "btn btn-success", tr(language, "save"))?;
    {
        let model_id = model.id.clone();
        let btn: HtmlElement = save_btn.clone().unchecked_into();
        let on_click = Closure::wrap(Box::new(move |_: MouseEvent| {
            let language = APP_STATE.with(|s| s.borrow().language);
            let updated = ModelConfig {
                id: model_id.clone(),
                name: name.value().trim().to_string(),
                description: desc.value().trim().to_string(),
                base_url: url.value().trim().to_string(),
                api_key_env: env.value().trim().to_string(),
                model: main.value().trim().to_string(),
                fast_model: fast.value().trim().to_string(),
            }
            .with_fast_model_default();

            if !updated.has_required_fields() {
                toast::error(tr(language, "requiredFields"));
                return;
            }

            let btn = btn.clone();
            spawn_local(async move {
                let id = updated.id.clone();
                if ApiClient::update_model(&id, &updated, BusyTarget::Control(btn))
                    .await
                    .is_ok()
                {
                    let language = APP_STATE.with(|s| s.borrow().language);
                    toast::success(&fill(tr(language, "updateSuccess"), &[&updated.name]));
                    dispatch_global_message(Message::CloseEditForm);
                    api_client::refresh_models_and_status().await;
                }
            });
        }) as Box<dyn FnMut(_)>);
        save_btn.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    buttons.append_child(&save_btn)?;

    let cancel_btn = make_button(document, "btn btn-danger", tr(language, "cancel"))?;
    {
        let on_click = Closure::wrap(Box::new(move |_: MouseEvent| {
            dispatch_global_message(Message::CloseEditForm);
        }) as Box<dyn FnMut(_)>);
        cancel_btn.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    buttons.append_child(&cancel_btn)?;

    form.append_child(&buttons)?;
    Ok(form)
}

fn make_button(document: &Document, class: &str, label: &str) -> Result<Element, JsValue> {
    let button = document.create_element("button")?;
    button.set_attribute("type", "button")?;
    button.set_class_name(class);
    button.set_text_content(Some(label));
    Ok(button)
}

fn labeled_input(
    document: &Document,
    parent: &Element,
    label_text: &str,
    input_type: &str,
    value: &str,
) -> Result<HtmlInputElement, JsValue> {
    let group = document.create_element("div")?;
    group.set_class_name("form-group");

    let label = document.create_element("label")?;
    label.set_text_content(Some(label_text));
    group.append_child(&label)?;

    let input: HtmlInputElement = document.create_element("input")?.unchecked_into();
    input.set_attribute("type", input_type)?;
    input.set_value(value);
    group.append_child(&input)?;

    parent.append_child(&group)?;
    Ok(input)
}

fn labeled_textarea(
    document: &Document,
    parent: &Element,
    label_text: &str,
    value: &str,
) -> Result<HtmlTextAreaElement, JsValue> {
    let group = document.create_element("div")?;
    group.set_class_name("form-group");

    let label = document.create_element("label")?;
    label.set_text_content(Some(label_text));
    group.append_child(&label)?;

    let textarea: HtmlTextAreaElement = document.create_element("textarea")?.unchecked_into();
    textarea.set_value(value);
    group.append_child(&textarea)?;

    parent.append_child(&group)?;
    Ok(textarea)
}

// ---------------------------------------------------------------------------
// Targeted updates through the row registry
// ---------------------------------------------------------------------------

/// Show the edit form of the row in edit mode and hide all others.
pub fn apply_edit_visibility() {
    let editing = APP_STATE.with(|s| s.borrow().editing_model_id.clone());
    apply_edit_visibility_for(editing.as_deref());
}

fn apply_edit_visibility_for(editing: Option<&str>) {
    MODEL_ROWS.with(|rows| {
        for (id, row) in rows.borrow().iter() {
            if editing == Some(id.as_str()) {
                dom_utils::show(&row.edit_form);
            } else {
                dom_utils::hide(&row.edit_form);
            }
        }
    });
}

/// Toggle row visibility against the current search term.
pub fn apply_filter() {
    let term = APP_STATE.with(|s| s.borrow().search_term.clone());
    apply_filter_term(&term);
}

fn apply_filter_term(term: &str) {
    let needle = term.trim().to_lowercase();
    MODEL_ROWS.with(|rows| {
        for row in rows.borrow().values() {
            if matches_filter(&row.haystack, &needle) {
                dom_utils::show(&row.card);
            } else {
                dom_utils::hide(&row.card);
            }
        }
    });
}

/// Case-insensitive substring match; the empty term matches everything.
/// Both sides must already be lower-cased.
pub fn matches_filter(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.contains(needle)
}

/// Filter corpus for one row: id, display name and the rendered info text.
pub fn build_haystack(id: &str, name: &str, info: &[&str]) -> String {
    let mut corpus = format!("{} {}", id, name);
    for part in info {
        corpus.push(' ');
        corpus.push_str(part);
    }
    corpus.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_term_shows_all_rows() {
        let corpus = build_haystack("claude3", "Claude 3", &["https://api.example.com"]);
        assert!(matches_filter(&corpus, ""));
    }

    #[test]
    fn match_is_case_insensitive_over_id_name_and_info() {
        let corpus = build_haystack(
            "claude3",
            "Claude 3",
            &["No description", "https://api.example.com", "CLAUDE_API_KEY"],
        );
        assert!(matches_filter(&corpus, "claude"));
        assert!(matches_filter(&corpus, "claude_api"));
        assert!(matches_filter(&corpus, "example.com"));
        assert!(!matches_filter(&corpus, "deepseek"));
    }

    proptest! {
        #[test]
        fn any_fragment_of_the_corpus_matches(
            id in "[a-z0-9_-]{1,12}",
            name in "[a-zA-Z0-9 ]{1,20}",
            info in "[a-zA-Z0-9:/. ]{0,40}",
        ) {
            let corpus = build_haystack(&id, &name, &[&info]);
            prop_assert!(matches_filter(&corpus, &id.to_lowercase()));
            prop_assert!(matches_filter(&corpus, &name.to_lowercase()));
            prop_assert!(matches_filter(&corpus, ""));
        }

        #[test]
        fn needles_absent_from_the_corpus_never_match(needle in "[xyz]{5,10}") {
            // Corpus built from a disjoint alphabet.
            let corpus = build_haystack("abc123", "ABC Model", &["https://api.abc.dev"]);
            prop_assert!(!matches_filter(&corpus, &needle));
        }
    }
}
