use serde::de::DeserializeOwned;
use std::collections::HashMap;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::constants::{KEYS_CONTAINER_ID, MODELS_CONTAINER_ID, STATUS_CONTAINER_ID};
use crate::dom_utils::{BusyScope, BusyTarget};
use crate::i18n;
use crate::messages::Message;
use crate::models::{
    ApiKeyEntry, CurrentStatus, KeyMutationResponse, KeyUpsertRequest, ModelConfig, SwitchRequest,
    TestOutcome, TestRequest,
};
use crate::state::{dispatch_global_message, APP_STATE};
use crate::toast;
use crate::utils::js_error_message;

/// Failure modes of one gateway round trip.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP {status}: {status_text}")]
    Request { status: u16, status_text: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response payload: {0}")]
    Decode(String),
}

// REST client for the configuration backend.
pub struct ApiClient;

impl ApiClient {
    fn url(path: &str) -> String {
        super::config::ApiConfig::from_url(&super::get_api_base_url()).url(path)
    }

    /// Single entry point every endpoint goes through. Acquires the busy
    /// scope for the call's duration, maps non-2xx and transport failures
    /// into `ApiError` and reports the failure as an error toast exactly
    /// once - callers only decide whether to continue.
    async fn call(
        path: &str,
        method: &str,
        body: Option<String>,
        busy: BusyTarget,
    ) -> Result<String, ApiError> {
        let _busy = BusyScope::acquire(busy);
        let result = Self::fetch_text(&Self::url(path), method, body).await;
        if let Err(err) = &result {
            web_sys::console::error_1(&format!("API error on {} {}: {}", method, path, err).into());
            toast::error(&err.to_string());
        }
        result
    }

    async fn fetch_text(url: &str, method: &str, body: Option<String>) -> Result<String, ApiError> {
        let network = |e: JsValue| ApiError::Network(js_error_message(&e));

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);

        let headers = Headers::new().map_err(network)?;
        if let Some(data) = &body {
            opts.set_body(&JsValue::from_str(data));
            headers.append("Content-Type", "application/json").map_err(network)?;
        }
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(url, &opts).map_err(network)?;

        let window = web_sys::window().ok_or_else(|| ApiError::Network("no global window exists".to_string()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network)?;
        let resp: Response = resp_value.dyn_into().map_err(network)?;

        // Non-2xx is a failure regardless of body content.
        if !resp.ok() {
            return Err(ApiError::Request {
                status: resp.status(),
                status_text: resp.status_text(),
            });
        }

        let text = JsFuture::from(resp.text().map_err(network)?)
            .await
            .map_err(network)?;
        Ok(text.as_string().unwrap_or_default())
    }

    /// Decode a 2xx body. A mismatched payload still counts as a failed call
    /// and goes through the same toast path as transport failures.
    fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
        serde_json::from_str(body).map_err(|e| {
            let err = ApiError::Decode(e.to_string());
            toast::error(&err.to_string());
            err
        })
    }

    fn encode_body<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
        serde_json::to_string(payload).map_err(|e| ApiError::Decode(e.to_string()))
    }

    // ---------------- Status & model configurations ----------------

    pub async fn get_status(busy: BusyTarget) -> Result<CurrentStatus, ApiError> {
        let body = Self::call("/status", "GET", None, busy).await?;
        Self::decode(&body)
    }

    pub async fn get_models(busy: BusyTarget) -> Result<Vec<ModelConfig>, ApiError> {
        let body = Self::call("/models", "GET", None, busy).await?;
        Self::decode(&body)
    }

    pub async fn switch_model(model_id: &str, busy: BusyTarget) -> Result<(), ApiError> {
        let payload = Self::encode_body(&SwitchRequest { model_id })?;
        let _ = Self::call("/switch", "POST", Some(payload), busy).await?;
        Ok(())
    }

    pub async fn create_model(config: &ModelConfig, busy: BusyTarget) -> Result<(), ApiError> {
        let payload = Self::encode_body(config)?;
        let _ = Self::call("/models", "POST", Some(payload), busy).await?;
        Ok(())
    }

    pub async fn update_model(
        model_id: &str,
        config: &ModelConfig,
        busy: BusyTarget,
    ) -> Result<(), ApiError> {
        let path = format!("/models/{}", encode_path_segment(model_id));
        let payload = Self::encode_body(config)?;
        let _ = Self::call(&path, "PUT", Some(payload), busy).await?;
        Ok(())
    }

    pub async fn delete_model(model_id: &str, busy: BusyTarget) -> Result<(), ApiError> {
        let path = format!("/models/{}", encode_path_segment(model_id));
        let _ = Self::call(&path, "DELETE", None, busy).await?;
        Ok(())
    }

    pub async fn clear_active(busy: BusyTarget) -> Result<(), ApiError> {
        let _ = Self::call("/clear", "POST", None, busy).await?;
        Ok(())
    }

    // ---------------- API keys ----------------

    pub async fn get_keys(busy: BusyTarget) -> Result<HashMap<String, ApiKeyEntry>, ApiError> {
        let body = Self::call("/keys", "GET", None, busy).await?;
        Self::decode(&body)
    }

    /// Set and add share the same backend endpoint; the 2xx body can still
    /// carry a logical rejection the caller must check.
    pub async fn upsert_key(
        env_var: &str,
        api_key: &str,
        busy: BusyTarget,
    ) -> Result<KeyMutationResponse, ApiError> {
        let payload = Self::encode_body(&KeyUpsertRequest { env_var, api_key })?;
        let body = Self::call("/keys", "POST", Some(payload), busy).await?;
        Self::decode(&body)
    }

    pub async fn delete_key(env_var: &str, busy: BusyTarget) -> Result<KeyMutationResponse, ApiError> {
        let path = format!("/keys/{}", encode_path_segment(env_var));
        let body = Self::call(&path, "DELETE", None, busy).await?;
        Self::decode(&body)
    }

    // ---------------- Model test ----------------

    /// The test round trip renders its own inline pending state in the
    /// result region, so it bypasses the shared busy indicator.
    pub async fn run_test(prompt: &str) -> Result<TestOutcome, ApiError> {
        let payload = Self::encode_body(&TestRequest { prompt })?;
        let body = Self::call("/test", "POST", Some(payload), BusyTarget::None).await?;
        Self::decode(&body)
    }
}

/// URI-encode a user-supplied value used as a path segment.
fn encode_path_segment(raw: &str) -> String {
    String::from(js_sys::encode_uri_component(raw))
}

// ---------------------------------------------------------------------------
// Collection loaders - fetch then dispatch. Used by the startup/refresh
// paths and by handlers re-syncing after a mutation.
// ---------------------------------------------------------------------------

/// Fetch the active-configuration snapshot and hand it to the state loop.
/// A failed load writes a localized error line into the status container
/// instead of leaving a stale snapshot on screen.
pub async fn load_status() {
    match ApiClient::get_status(BusyTarget::Page).await {
        Ok(status) => dispatch_global_message(Message::StatusLoaded(status)),
        Err(_) => render_load_failure(STATUS_CONTAINER_ID, "statusLoadError"),
    }
}

pub async fn load_models() {
    match ApiClient::get_models(BusyTarget::Page).await {
        Ok(models) => dispatch_global_message(Message::ModelsLoaded(models)),
        Err(_) => render_load_failure(MODELS_CONTAINER_ID, "modelsLoadError"),
    }
}

pub async fn load_keys() {
    match ApiClient::get_keys(BusyTarget::Page).await {
        Ok(keys) => dispatch_global_message(Message::KeysLoaded(keys)),
        Err(_) => render_load_failure(KEYS_CONTAINER_ID, "keysLoadError"),
    }
}

fn render_load_failure(container_id: &str, key: &'static str) {
    let language = APP_STATE.with(|s| s.borrow().language);
    if let Some(container) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id))
    {
        container.set_inner_html(&format!(
            "<div class=\"loading error\">{}</div>",
            i18n::tr(language, key)
        ));
    }
}

/// Refresh every dynamic collection. The three fetches run concurrently and
/// the results dispatch together; when the joined form fails, the
/// collections are retried one at a time so a single dead endpoint cannot
/// blank the other panels.
pub async fn refresh_dynamic_content() {
    let joined = futures::try_join!(
        ApiClient::get_status(BusyTarget::Page),
        ApiClient::get_models(BusyTarget::Page),
        ApiClient::get_keys(BusyTarget::Page),
    );
    match joined {
        Ok((status, models, keys)) => {
            dispatch_global_message(Message::StatusLoaded(status));
            dispatch_global_message(Message::ModelsLoaded(models));
            dispatch_global_message(Message::KeysLoaded(keys));
        }
        Err(_) => {
            load_status().await;
            load_models().await;
            load_keys().await;
        }
    }
}

/// Status plus model list - the pair affected by every model mutation.
pub async fn refresh_models_and_status() {
    let joined = futures::try_join!(
        ApiClient::get_status(BusyTarget::Page),
        ApiClient::get_models(BusyTarget::Page),
    );
    match joined {
        Ok((status, models)) => {
            dispatch_global_message(Message::StatusLoaded(status));
            dispatch_global_message(Message::ModelsLoaded(models));
        }
        Err(_) => {
            load_status().await;
            load_models().await;
        }
    }
}
