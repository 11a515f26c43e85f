//! API key rows: masked previews, per-row set, delete for user-added
//! entries. Config-derived entries get no delete control - the restriction
//! lives entirely in this layer.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, MouseEvent};

use crate::constants::KEYS_CONTAINER_ID;
use crate::dom_utils::BusyTarget;
use crate::i18n::{fill, tr, Language};
use crate::models::ApiKeyEntry;
use crate::network::api_client::{self, ApiClient};
use crate::state::APP_STATE;
use crate::toast;
use crate::utils;

pub fn render(document: &Document) -> Result<(), JsValue> {
    let (language, keys) = APP_STATE.with(|s| {
        let s = s.borrow();
        (s.language, s.keys.clone())
    });

    let container = match document.get_element_by_id(KEYS_CONTAINER_ID) {
        Some(container) => container,
        None => return Ok(()),
    };
    container.set_inner_html("");

    let entries = match keys {
        Some(entries) => entries,
        None => {
            container.set_inner_html(&format!(
                "<div class=\"loading\">{}</div>",
                tr(language, "loading")
            ));
            return Ok(());
        }
    };
    if entries.is_empty() {
        container.set_inner_html(&format!(
            "<div class=\"loading\">{}</div>",
            tr(language, "noKeys")
        ));
        return Ok(());
    }

    for (env_var, entry) in &entries {
        container.append_child(&build_row(document, language, env_var, entry)?.into())?;
    }
    Ok(())
}

fn build_row(
    document: &Document,
    language: Language,
    env_var: &str,
    entry: &ApiKeyEntry,
) -> Result<Element, JsValue> {
    let row = document.create_element("div")?;
    row.set_class_name("key-card");

    let header = document.create_element("div")?;
    header.set_class_name("key-header");

    let name = document.create_element("code")?;
    name.set_text_content(Some(env_var));
    header.append_child(&name)?;

    if entry.is_from_config {
        let badge = document.create_element("span")?;
        badge.set_class_name("key-badge");
        badge.set_text_content(Some(tr(language, "fromConfigBadge")));
        header.append_child(&badge)?;
    }
    row.append_child(&header)?;

    let info = document.create_element("div")?;
    info.set_class_name("key-info");
    info.set_text_content(Some(&format!("{} ({})", entry.model_name, entry.model_id)));
    row.append_child(&info)?;

    // The raw key never reaches the client; render the masked preview or
    // the not-set hint.
    let preview = document.create_element("div")?;
    preview.set_class_name(if entry.has_key {
        "key-preview"
    } else {
        "key-preview key-missing"
    });
    let preview_text = if entry.has_key {
        entry
            .key_preview
            .clone()
            .unwrap_or_else(|| tr(language, "keySet").to_string())
    } else {
        tr(language, "keyNotSet").to_string()
    };
    preview.set_text_content(Some(&preview_text));
    row.append_child(&preview)?;

    let controls = document.create_element("div")?;
    controls.set_class_name("button-group");

    // Write-only value input plus save.
    let value_input: HtmlInputElement = document.create_element("input")?.unchecked_into();
    value_input.set_attribute("type", "password")?;
    value_input.set_placeholder(tr(language, "keyValuePlaceholder"));
    controls.append_child(&value_input)?;

    let save_btn = document.create_element("button")?;
    save_btn.set_attribute("type", "button")?;
    save_btn.set_class_name("btn btn-success");
    save_btn.set_text_content(Some(tr(language, "setKey")));
    {
        let env_var = env_var.to_string();
        let value_input = value_input.clone();
        let btn: HtmlElement = save_btn.clone().unchecked_into();
        let on_click = Closure::wrap(Box::new(move |_: MouseEvent| {
            let language = APP_STATE.with(|s| s.borrow().language);
            let value = value_input.value().trim().to_string();
            if value.is_empty() {
                toast::error(tr(language, "emptyKeyValue"));
                return;
            }
            let env_var = env_var.clone();
            let value_input = value_input.clone();
            let btn = btn.clone();
            spawn_local(async move {
                match ApiClient::upsert_key(&env_var, &value, BusyTarget::Control(btn)).await {
                    Ok(resp) if resp.success => {
                        value_input.set_value("");
                        let language = APP_STATE.with(|s| s.borrow().language);
                        toast::success(&fill(tr(language, "keySavedSuccess"), &[&env_var]));
                        api_client::load_keys().await;
                    }
                    Ok(resp) => {
                        let language = APP_STATE.with(|s| s.borrow().language);
                        toast::error(
                            resp.message
                                .as_deref()
                                .unwrap_or(tr(language, "keyActionFailed")),
                        );
                    }
                    Err(_) => {}
                }
            });
        }) as Box<dyn FnMut(_)>);
        save_btn.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    controls.append_child(&save_btn)?;

    if !entry.is_from_config {
        let delete_btn = document.create_element("button")?;
        delete_btn.set_attribute("type", "button")?;
        delete_btn.set_class_name("btn btn-danger");
        delete_btn.set_text_content(Some(tr(language, "delete")));
        {
            let env_var = env_var.to_string();
            let btn: HtmlElement = delete_btn.clone().unchecked_into();
            let on_click = Closure::wrap(Box::new(move |_: MouseEvent| {
                let language = APP_STATE.with(|s| s.borrow().language);
                let prompt = fill(tr(language, "keyDeleteConfirm"), &[&env_var]);
                if !utils::confirm(&prompt) {
                    return;
                }
                let env_var = env_var.clone();
                let btn = btn.clone();
                spawn_local(async move {
                    match ApiClient::delete_key(&env_var, BusyTarget::Control(btn)).await {
                        Ok(resp) if resp.success => {
                            let language = APP_STATE.with(|s| s.borrow().language);
                            toast::success(&fill(tr(language, "keyDeletedSuccess"), &[&env_var]));
                            api_client::load_keys().await;
                        }
                        Ok(resp) => {
                            let language = APP_STATE.with(|s| s.borrow().language);
                            toast::error(
                                resp.message
                                    .as_deref()
                                    .unwrap_or(tr(language, "keyActionFailed")),
                            );
                        }
                        Err(_) => {}
                    }
                });
            }) as Box<dyn FnMut(_)>);
            delete_btn.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            on_click.forget();
        }
        controls.append_child(&delete_btn)?;
    }

    row.append_child(&controls)?;
    Ok(row)
}
