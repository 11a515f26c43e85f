//! localStorage persistence. Only the language preference survives reloads;
//! every other piece of state is re-fetched from the backend on startup.

use crate::constants::LANGUAGE_STORAGE_KEY;
use crate::i18n::Language;

pub fn load_language() -> Language {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(LANGUAGE_STORAGE_KEY).ok().flatten());

    match stored {
        Some(tag) => Language::from_tag(&tag),
        None => Language::En,
    }
}

pub fn save_language(language: Language) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(LANGUAGE_STORAGE_KEY, language.as_str());
    }
}
