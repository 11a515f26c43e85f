//! Static page skeleton. Everything here is built once at startup; the
//! dynamic containers are repainted by the component renderers. Labels and
//! placeholders carry a `data-i18n` attribute and receive their text from
//! `views::apply_translations`.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::constants::*;
use crate::dom_utils;

pub fn build_page(document: &Document) -> Result<(), JsValue> {
    ensure_styles(document)?;

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("No body found"))?;

    // Header -----------------------------------------------------------
    let header = document.create_element("div")?;
    header.set_class_name("header");

    let header_bar = document.create_element("div")?;
    header_bar.set_class_name("header-bar");

    let title = i18n_element(document, "h1", "title")?;
    header_bar.append_child(&title)?;

    let language_btn = button(document, LANGUAGE_TOGGLE_ID, "btn btn-secondary", "languageSwitch")?;
    header_bar.append_child(&language_btn)?;
    header.append_child(&header_bar)?;

    let subtitle = i18n_element(document, "p", "subtitle")?;
    subtitle.set_class_name("subtitle");
    header.append_child(&subtitle)?;
    body.append_child(&header)?;

    // Current status ----------------------------------------------------
    let status_section = section(document)?;

    let status_header = document.create_element("div")?;
    status_header.set_class_name("section-header");
    status_header.append_child(&i18n_element(document, "h2", "currentStatus")?.into())?;

    let status_buttons = document.create_element("div")?;
    status_buttons.set_class_name("button-group");
    status_buttons.append_child(&button(document, REFRESH_BUTTON_ID, "btn btn-secondary", "refreshStatus")?.into())?;
    status_buttons.append_child(&button(document, CLEAR_BUTTON_ID, "btn btn-danger", "clearConfig")?.into())?;
    status_header.append_child(&status_buttons)?;
    status_section.append_child(&status_header)?;

    status_section.append_child(&loading_container(document, STATUS_CONTAINER_ID)?.into())?;
    body.append_child(&status_section)?;

    // Model management --------------------------------------------------
    let models_section = section(document)?;

    let models_header = document.create_element("div")?;
    models_header.set_class_name("section-header");
    models_header.append_child(&i18n_element(document, "h2", "modelManagement")?.into())?;
    models_header.append_child(&button(document, SHOW_ADD_FORM_ID, "btn btn-primary", "addNewModel")?.into())?;
    models_section.append_child(&models_header)?;

    let search = document.create_element("input")?;
    search.set_id(SEARCH_INPUT_ID);
    search.set_class_name("search-box");
    search.set_attribute("type", "text")?;
    search.set_attribute("data-i18n", "searchPlaceholder")?;
    models_section.append_child(&search)?;

    models_section.append_child(&build_add_form(document)?.into())?;
    models_section.append_child(&loading_container(document, MODELS_CONTAINER_ID)?.into())?;
    body.append_child(&models_section)?;

    // API keys ----------------------------------------------------------
    let keys_section = section(document)?;
    keys_section.append_child(&i18n_element(document, "h2", "keyManagement")?.into())?;

    let key_add_row = document.create_element("div")?;
    key_add_row.set_class_name("key-add-row");

    let env_input = document.create_element("input")?;
    env_input.set_id(ADD_KEY_ENV_INPUT);
    env_input.set_attribute("type", "text")?;
    env_input.set_attribute("data-i18n", "envVarPlaceholder")?;
    key_add_row.append_child(&env_input)?;

    let value_input = document.create_element("input")?;
    value_input.set_id(ADD_KEY_VALUE_INPUT);
    value_input.set_attribute("type", "password")?;
    value_input.set_attribute("data-i18n", "keyValuePlaceholder")?;
    key_add_row.append_child(&value_input)?;

    key_add_row.append_child(&button(document, ADD_KEY_BUTTON_ID, "btn btn-primary", "addKey")?.into())?;
    keys_section.append_child(&key_add_row)?;

    keys_section.append_child(&loading_container(document, KEYS_CONTAINER_ID)?.into())?;
    body.append_child(&keys_section)?;

    // Model test --------------------------------------------------------
    let test_section = section(document)?;
    test_section.append_child(&i18n_element(document, "h2", "testSection")?.into())?;

    let prompt = document.create_element("textarea")?;
    prompt.set_id(TEST_PROMPT_INPUT);
    prompt.set_class_name("test-prompt");
    prompt.set_attribute("data-i18n", "testPromptPlaceholder")?;
    test_section.append_child(&prompt)?;

    test_section.append_child(&button(document, RUN_TEST_BUTTON_ID, "btn btn-primary", "runTest")?.into())?;

    let result = document.create_element("div")?;
    result.set_id(TEST_RESULT_ID);
    result.set_class_name("test-result");
    dom_utils::hide(&result);
    test_section.append_child(&result)?;
    body.append_child(&test_section)?;

    Ok(())
}

/// The add-model form, hidden until requested.
fn build_add_form(document: &Document) -> Result<Element, JsValue> {
    let form = document.create_element("div")?;
    form.set_id(ADD_FORM_ID);
    form.set_class_name("edit-form");
    dom_utils::hide(&form);

    form.append_child(&i18n_element(document, "h4", "addModelTitle")?.into())?;

    form_group(document, &form, "modelIdLabel", ADD_ID_INPUT, "text", "modelIdPlaceholder")?;
    form_group(document, &form, "displayNameLabel", ADD_NAME_INPUT, "text", "displayNamePlaceholder")?;

    // Description is the one multi-line field.
    let group = document.create_element("div")?;
    group.set_class_name("form-group");
    group.append_child(&i18n_element(document, "label", "descriptionLabel")?.into())?;
    let textarea = document.create_element("textarea")?;
    textarea.set_id(ADD_DESC_INPUT);
    textarea.set_attribute("data-i18n", "descriptionPlaceholder")?;
    group.append_child(&textarea)?;
    form.append_child(&group)?;

    form_group(document, &form, "baseUrlLabel", ADD_URL_INPUT, "url", "baseUrlPlaceholder")?;
    form_group(document, &form, "apiKeyEnvLabel", ADD_ENV_INPUT, "text", "apiKeyEnvPlaceholder")?;
    form_group(document, &form, "mainModelLabel", ADD_MODEL_INPUT, "text", "mainModelPlaceholder")?;
    form_group(document, &form, "fastModelLabel", ADD_FAST_INPUT, "text", "fastModelPlaceholder")?;

    let buttons = document.create_element("div")?;
    buttons.set_class_name("button-group");
    buttons.append_child(&button(document, ADD_SAVE_BUTTON_ID, "btn btn-success", "save")?.into())?;
    buttons.append_child(&button(document, ADD_CANCEL_BUTTON_ID, "btn btn-danger", "cancel")?.into())?;
    form.append_child(&buttons)?;

    Ok(form)
}

/// Dynamic-collection container pre-filled with a localized loading hint;
/// the first successful fetch repaints it.
fn loading_container(document: &Document, id: &str) -> Result<Element, JsValue> {
    let container = document.create_element("div")?;
    container.set_id(id);

    let placeholder = document.create_element("div")?;
    placeholder.set_class_name("loading");
    placeholder.set_attribute("data-i18n", "loading")?;
    container.append_child(&placeholder)?;

    Ok(container)
}

fn section(document: &Document) -> Result<Element, JsValue> {
    let section = document.create_element("div")?;
    section.set_class_name("section");
    Ok(section)
}

fn i18n_element(document: &Document, tag: &str, key: &str) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    element.set_attribute("data-i18n", key)?;
    Ok(element)
}

fn button(document: &Document, id: &str, class: &str, key: &str) -> Result<Element, JsValue> {
    let button = document.create_element("button")?;
    button.set_id(id);
    button.set_attribute("type", "button")?;
    button.set_class_name(class);
    button.set_attribute("data-i18n", key)?;
    Ok(button)
}

fn form_group(
    document: &Document,
    parent: &Element,
    label_key: &str,
    input_id: &str,
    input_type: &str,
    placeholder_key: &str,
) -> Result<(), JsValue> {
    let group = document.create_element("div")?;
    group.set_class_name("form-group");
    group.append_child(&i18n_element(document, "label", label_key)?.into())?;

    let input = document.create_element("input")?;
    input.set_id(input_id);
    input.set_attribute("type", input_type)?;
    input.set_attribute("data-i18n", placeholder_key)?;
    group.append_child(&input)?;

    parent.append_child(&group)?;
    Ok(())
}

fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id("app-styles").is_some() {
        return Ok(());
    }

    let css = "
body{font-family:Arial,Helvetica,sans-serif;margin:0;padding:24px;background:#f5f6f8;color:#2c3e50}
body.app-busy{cursor:progress}
.hidden{display:none!important}
.header-bar{display:flex;justify-content:space-between;align-items:center}
.subtitle{color:#7f8c8d;margin-top:4px}
.section{background:#fff;border-radius:8px;padding:16px;margin-top:16px;box-shadow:0 1px 3px rgba(0,0,0,.08)}
.section-header{display:flex;justify-content:space-between;align-items:center}
.button-group{display:flex;gap:8px;margin-top:8px;align-items:center;flex-wrap:wrap}
.btn{border:0;border-radius:4px;padding:8px 14px;color:#fff;cursor:pointer}
.btn:disabled{opacity:.6;cursor:wait}
.btn.is-busy{opacity:.6}
.btn-primary{background:#2563eb}
.btn-secondary{background:#64748b}
.btn-success{background:#16a34a}
.btn-warning{background:#d97706}
.btn-danger{background:#dc2626}
.search-box{width:100%;box-sizing:border-box;margin-top:12px;padding:8px;border:1px solid #cbd5e1;border-radius:4px}
.loading{color:#7f8c8d;padding:12px;text-align:center}
.loading.error{color:#e74c3c}
.status-item{display:flex;justify-content:space-between;padding:6px 0;border-bottom:1px solid #eef2f7}
.status-label{color:#7f8c8d}
.status-provider{font-weight:bold;color:#27ae60}
.status-empty{text-align:center;color:#7f8c8d}
.model-card{border:1px solid #e2e8f0;border-radius:6px;padding:12px;margin-top:12px}
.model-info{display:flex;flex-direction:column;gap:2px;margin-top:6px;color:#475569}
.edit-form{border-top:1px dashed #cbd5e1;margin-top:12px;padding-top:12px}
.form-group{display:flex;flex-direction:column;gap:4px;margin-top:8px}
.form-group input,.form-group textarea{padding:6px;border:1px solid #cbd5e1;border-radius:4px}
.key-card{border:1px solid #e2e8f0;border-radius:6px;padding:12px;margin-top:12px}
.key-header{display:flex;gap:8px;align-items:center}
.key-badge{background:#e0e7ff;color:#3730a3;border-radius:10px;padding:2px 8px;font-size:12px}
.key-info{color:#475569;margin-top:4px}
.key-preview{font-family:monospace;margin-top:4px}
.key-missing{color:#b91c1c}
.key-add-row{display:flex;gap:8px;margin-top:8px}
.key-add-row input{flex:1;padding:6px;border:1px solid #cbd5e1;border-radius:4px}
.test-prompt{width:100%;box-sizing:border-box;min-height:64px;margin-top:8px;padding:8px;border:1px solid #cbd5e1;border-radius:4px}
.test-result{margin-top:12px;padding:12px;border-radius:6px;background:#f8fafc}
.test-pending{color:#7f8c8d}
.test-error{color:#b91c1c}
.test-line{margin-top:4px}
";

    let style = document.create_element("style")?;
    style.set_id("app-styles");
    style.set_text_content(Some(css));
    if let Ok(Some(head)) = document.query_selector("head") {
        head.append_child(&style)?;
    } else if let Some(body) = document.body() {
        body.append_child(&style)?;
    }
    Ok(())
}
