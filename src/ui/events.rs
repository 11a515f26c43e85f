//! Wiring for the static controls. Per-row handlers live with the model and
//! key renderers; everything here exists once per page.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent};

use crate::components::add_model_form;
use crate::constants::*;
use crate::dom_utils::{html_input, html_textarea, BusyTarget};
use crate::i18n::{fill, tr};
use crate::messages::Message;
use crate::models::TestOutcome;
use crate::network::api_client::{self, ApiClient};
use crate::state::{dispatch_global_message, APP_STATE};
use crate::toast;
use crate::utils;

pub fn attach(document: &Document) -> Result<(), JsValue> {
    // Language toggle - everything else follows from the state change.
    on_click(document, LANGUAGE_TOGGLE_ID, move |_| {
        dispatch_global_message(Message::ToggleLanguage);
    })?;

    // Manual refresh of status + model list.
    on_click(document, REFRESH_BUTTON_ID, move |_| {
        spawn_local(async {
            api_client::refresh_models_and_status().await;
            let language = APP_STATE.with(|s| s.borrow().language);
            toast::info(tr(language, "refreshSuccess"));
        });
    })?;

    // Clear the active configuration after confirmation.
    {
        let element = require(document, CLEAR_BUTTON_ID)?;
        let btn: HtmlElement = element.clone().unchecked_into();
        let on_click = Closure::wrap(Box::new(move |_: MouseEvent| {
            let language = APP_STATE.with(|s| s.borrow().language);
            if !utils::confirm(tr(language, "clearConfirm")) {
                return;
            }
            let btn = btn.clone();
            spawn_local(async move {
                if ApiClient::clear_active(BusyTarget::Control(btn)).await.is_ok() {
                    let language = APP_STATE.with(|s| s.borrow().language);
                    toast::success(tr(language, "clearSuccess"));
                    api_client::load_status().await;
                }
            });
        }) as Box<dyn FnMut(_)>);
        element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    // Search box filters on every keystroke.
    {
        let element = require(document, SEARCH_INPUT_ID)?;
        let input = element
            .clone()
            .dyn_into::<web_sys::HtmlInputElement>()
            .map_err(|_| JsValue::from_str("search box is not an input"))?;
        let on_input = Closure::wrap(Box::new(move |_: Event| {
            dispatch_global_message(Message::SearchChanged(input.value()));
        }) as Box<dyn FnMut(_)>);
        element.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
        on_input.forget();
    }

    // Add-model form visibility.
    on_click(document, SHOW_ADD_FORM_ID, move |_| {
        add_model_form::open(&utils::document());
    })?;
    on_click(document, ADD_CANCEL_BUTTON_ID, move |_| {
        add_model_form::close(&utils::document());
    })?;

    // Add-model submission.
    {
        let element = require(document, ADD_SAVE_BUTTON_ID)?;
        let btn: HtmlElement = element.clone().unchecked_into();
        let on_click = Closure::wrap(Box::new(move |_: MouseEvent| {
            let document = utils::document();
            let language = APP_STATE.with(|s| s.borrow().language);
            let config = match add_model_form::collect(&document) {
                Ok(config) => config,
                Err(key) => {
                    toast::error(tr(language, key));
                    return;
                }
            };
            let btn = btn.clone();
            spawn_local(async move {
                if ApiClient::create_model(&config, BusyTarget::Control(btn)).await.is_ok() {
                    let document = utils::document();
                    add_model_form::close(&document);
                    add_model_form::reset(&document);
                    let language = APP_STATE.with(|s| s.borrow().language);
                    toast::success(&fill(tr(language, "addSuccess"), &[&config.name]));
                    api_client::refresh_models_and_status().await;
                }
            });
        }) as Box<dyn FnMut(_)>);
        element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    // Add a user-managed key.
    {
        let element = require(document, ADD_KEY_BUTTON_ID)?;
        let btn: HtmlElement = element.clone().unchecked_into();
        let on_click = Closure::wrap(Box::new(move |_: MouseEvent| {
            let document = utils::document();
            let language = APP_STATE.with(|s| s.borrow().language);

            let env_var = html_input(&document, ADD_KEY_ENV_INPUT)
                .map(|i| i.value())
                .unwrap_or_default()
                .trim()
                .to_string();
            let value = html_input(&document, ADD_KEY_VALUE_INPUT)
                .map(|i| i.value())
                .unwrap_or_default()
                .trim()
                .to_string();
            if env_var.is_empty() || value.is_empty() {
                toast::error(tr(language, "requiredFields"));
                return;
            }

            let btn = btn.clone();
            spawn_local(async move {
                match ApiClient::upsert_key(&env_var, &value, BusyTarget::Control(btn)).await {
                    Ok(resp) if resp.success => {
                        let document = utils::document();
                        for id in [ADD_KEY_ENV_INPUT, ADD_KEY_VALUE_INPUT] {
                            if let Some(input) = html_input(&document, id) {
                                input.set_value("");
                            }
                        }
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
        element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    // Run a connectivity test against the active model. Both preconditions
    // fail locally, before any network traffic.
    on_click(document, RUN_TEST_BUTTON_ID, move |_| {
        let document = utils::document();
        let language = APP_STATE.with(|s| s.borrow().language);

        let configured = APP_STATE.with(|s| {
            s.borrow()
                .status
                .as_ref()
                .map(|status| status.configured)
                .unwrap_or(false)
        });
        if !configured {
            toast::error(tr(language, "noModelConfigured"));
            return;
        }

        let prompt = html_textarea(&document, TEST_PROMPT_INPUT)
            .map(|t| t.value())
            .unwrap_or_default()
            .trim()
            .to_string();
        if prompt.is_empty() {
            toast::error(tr(language, "emptyPrompt"));
            return;
        }

        dispatch_global_message(Message::TestStarted);
        spawn_local(async move {
            let outcome = match ApiClient::run_test(&prompt).await {
                Ok(outcome) => outcome,
                Err(err) => TestOutcome::failure(err.to_string()),
            };
            dispatch_global_message(Message::TestFinished(outcome));
        });
    })?;

    Ok(())
}

fn require(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("#{} not found", id)))
}

fn on_click<F>(document: &Document, id: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let element = require(document, id)?;
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
