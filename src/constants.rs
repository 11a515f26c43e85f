// Element ids for the fixed page skeleton - single source of truth so the
// renderers and the event wiring never drift apart.
pub const STATUS_CONTAINER_ID: &str = "current-status";
pub const MODELS_CONTAINER_ID: &str = "models-container";
pub const KEYS_CONTAINER_ID: &str = "keys-container";
pub const TEST_RESULT_ID: &str = "test-result";

pub const LANGUAGE_TOGGLE_ID: &str = "language-toggle";
pub const REFRESH_BUTTON_ID: &str = "refresh-status";
pub const CLEAR_BUTTON_ID: &str = "clear-config";
pub const SEARCH_INPUT_ID: &str = "model-search";

pub const ADD_FORM_ID: &str = "add-model-form";
pub const SHOW_ADD_FORM_ID: &str = "show-add-form";
pub const ADD_SAVE_BUTTON_ID: &str = "add-model-save";
pub const ADD_CANCEL_BUTTON_ID: &str = "add-model-cancel";
pub const ADD_ID_INPUT: &str = "add-model-id";
pub const ADD_NAME_INPUT: &str = "add-model-name";
pub const ADD_DESC_INPUT: &str = "add-model-description";
pub const ADD_URL_INPUT: &str = "add-model-base-url";
pub const ADD_ENV_INPUT: &str = "add-model-api-key-env";
pub const ADD_MODEL_INPUT: &str = "add-model-main";
pub const ADD_FAST_INPUT: &str = "add-model-fast";

pub const ADD_KEY_ENV_INPUT: &str = "add-key-env";
pub const ADD_KEY_VALUE_INPUT: &str = "add-key-value";
pub const ADD_KEY_BUTTON_ID: &str = "add-key-save";

pub const TEST_PROMPT_INPUT: &str = "test-prompt";
pub const RUN_TEST_BUTTON_ID: &str = "run-test";

// Persisted client-side state: the language preference only.
pub const LANGUAGE_STORAGE_KEY: &str = "language";

// Toast lifetimes - errors stay up long enough to actually be read.
pub const SUCCESS_TOAST_MS: u32 = 4_000;
pub const ERROR_TOAST_MS: u32 = 8_000;
