use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Wire types for the configuration backend. Model configurations travel in
// snake_case; the status/key/test payloads use camelCase field names.

/// One named provider entry in the backend configuration store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub base_url: String,
    pub api_key_env: String,
    pub model: String,
    #[serde(default)]
    pub fast_model: String,
}

impl ModelConfig {
    /// An empty fast model falls back to the main model before submission.
    pub fn with_fast_model_default(mut self) -> Self {
        if self.fast_model.trim().is_empty() {
            self.fast_model = self.model.clone();
        }
        self
    }

    /// `name`, `base_url`, `api_key_env` and `model` are required on both
    /// the add and edit paths.
    pub fn has_required_fields(&self) -> bool {
        !(self.name.trim().is_empty()
            || self.base_url.trim().is_empty()
            || self.api_key_env.trim().is_empty()
            || self.model.trim().is_empty())
    }
}

/// Ids are restricted to `[A-Za-z0-9_-]+`. Checked on add only; the id is
/// immutable afterwards.
pub fn is_valid_model_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Read-only snapshot of the active configuration, recomputed by the
/// backend after every switch or clear.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentStatus {
    pub configured: bool,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub fast_model: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
}

/// One stored credential slot, keyed by environment-variable name. The raw
/// value never reaches the client - only a masked preview and a presence
/// flag.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyEntry {
    #[serde(default)]
    pub model_name: String,
    #[serde(default)]
    pub model_id: String,
    #[serde(default)]
    pub has_key: bool,
    #[serde(default)]
    pub key_preview: Option<String>,
    #[serde(default)]
    pub is_from_config: bool,
}

/// Display order for the key listing: config-derived entries ahead of
/// user-added ones, alphabetical by environment variable within each group.
pub fn order_key_entries(entries: HashMap<String, ApiKeyEntry>) -> Vec<(String, ApiKeyEntry)> {
    let mut ordered: Vec<(String, ApiKeyEntry)> = entries.into_iter().collect();
    ordered.sort_by(|(a_env, a), (b_env, b)| {
        b.is_from_config
            .cmp(&a.is_from_config)
            .then_with(|| a_env.cmp(b_env))
    });
    ordered
}

/// 2xx body of the key mutation endpoints; `success == false` is a backend
/// rejection the transport layer cannot detect.
#[derive(Clone, Debug, Deserialize)]
pub struct KeyMutationResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Result of one `/test` round trip.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestOutcome {
    pub success: bool,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl TestOutcome {
    /// Failed outcome for errors raised before or by the transport layer.
    pub fn failure(error: String) -> Self {
        Self {
            success: false,
            model: None,
            base_url: None,
            response: None,
            error: Some(error),
        }
    }
}

// Request bodies --------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchRequest<'a> {
    pub model_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyUpsertRequest<'a> {
    pub env_var: &'a str,
    pub api_key: &'a str,
}

#[derive(Serialize)]
pub struct TestRequest<'a> {
    pub prompt: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(id: &str, fast_model: &str) -> ModelConfig {
        ModelConfig {
            id: id.to_string(),
            name: "Claude 3".to_string(),
            description: String::new(),
            base_url: "https://api.example.com".to_string(),
            api_key_env: "CLAUDE_API_KEY".to_string(),
            model: "claude-3-opus".to_string(),
            fast_model: fast_model.to_string(),
        }
    }

    #[test]
    fn empty_fast_model_defaults_to_main_model() {
        let normalized = config("claude3", "").with_fast_model_default();
        assert_eq!(normalized.fast_model, "claude-3-opus");

        let explicit = config("claude3", "claude-3-haiku").with_fast_model_default();
        assert_eq!(explicit.fast_model, "claude-3-haiku");
    }

    #[test]
    fn whitespace_fast_model_also_defaults() {
        let normalized = config("claude3", "   ").with_fast_model_default();
        assert_eq!(normalized.fast_model, "claude-3-opus");
    }

    #[test]
    fn model_id_charset() {
        assert!(is_valid_model_id("claude3"));
        assert!(is_valid_model_id("gpt-4_turbo"));
        assert!(!is_valid_model_id(""));
        assert!(!is_valid_model_id("bad id"));
        assert!(!is_valid_model_id("claude/3"));
        assert!(!is_valid_model_id("模型"));
    }

    #[test]
    fn required_field_detection() {
        assert!(config("claude3", "").has_required_fields());
        let mut missing = config("claude3", "");
        missing.base_url = "  ".to_string();
        assert!(!missing.has_required_fields());
    }

    #[test]
    fn key_entries_order_config_first_then_alphabetical() {
        let entry = |from_config: bool| ApiKeyEntry {
            model_name: "m".to_string(),
            model_id: "m".to_string(),
            has_key: true,
            key_preview: Some("sk-...abc".to_string()),
            is_from_config: from_config,
        };
        let mut entries = HashMap::new();
        entries.insert("ZULU_KEY".to_string(), entry(true));
        entries.insert("ALPHA_KEY".to_string(), entry(false));
        entries.insert("BETA_KEY".to_string(), entry(true));
        entries.insert("DELTA_KEY".to_string(), entry(false));

        let names: Vec<String> = order_key_entries(entries)
            .into_iter()
            .map(|(env, _)| env)
            .collect();
        assert_eq!(names, ["BETA_KEY", "ZULU_KEY", "ALPHA_KEY", "DELTA_KEY"]);
    }

    #[test]
    fn status_decodes_camel_case() {
        let status: CurrentStatus = serde_json::from_str(
            r#"{"configured":true,"baseUrl":"https://api.example.com","model":"claude-3-opus","fastModel":"claude-3-haiku","provider":"claude3"}"#,
        )
        .unwrap();
        assert!(status.configured);
        assert_eq!(status.provider.as_deref(), Some("claude3"));
        assert_eq!(status.fast_model.as_deref(), Some("claude-3-haiku"));
    }

    #[test]
    fn unconfigured_status_tolerates_missing_fields() {
        let status: CurrentStatus = serde_json::from_str(r#"{"configured":false}"#).unwrap();
        assert!(!status.configured);
        assert!(status.base_url.is_none());
    }

    #[test]
    fn key_entry_decodes_camel_case() {
        let entry: ApiKeyEntry = serde_json::from_str(
            r#"{"modelName":"DeepSeek","modelId":"deepseek","hasKey":true,"keyPreview":"sk-...f3","isFromConfig":true}"#,
        )
        .unwrap();
        assert!(entry.has_key);
        assert!(entry.is_from_config);
        assert_eq!(entry.key_preview.as_deref(), Some("sk-...f3"));
    }

    #[test]
    fn request_bodies_serialize_camel_case() {
        let switch = serde_json::to_string(&SwitchRequest { model_id: "claude3" }).unwrap();
        assert_eq!(switch, r#"{"modelId":"claude3"}"#);

        let upsert = serde_json::to_string(&KeyUpsertRequest {
            env_var: "DEEPSEEK_API_KEY",
            api_key: "sk-secret",
        })
        .unwrap();
        assert_eq!(
            upsert,
            r#"{"envVar":"DEEPSEEK_API_KEY","apiKey":"sk-secret"}"#
        );
    }
}
