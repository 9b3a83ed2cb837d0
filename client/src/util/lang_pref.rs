//! Interface language preference.
//!
//! Reads the saved language from `localStorage` and mirrors it onto the
//! `lang` attribute of the `<html>` element. Saving writes both back.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths render the
//! default language and no-op on save to keep server rendering deterministic.

#[cfg(test)]
#[path = "lang_pref_test.rs"]
mod lang_pref_test;

use crate::i18n::Lang;
use crate::util::storage;

const STORAGE_KEY: &str = "language";

/// Saved language, or the default when nothing (or garbage) is stored.
pub fn read_preference() -> Lang {
    storage::get_item(STORAGE_KEY)
        .and_then(|code| Lang::from_code(&code))
        .unwrap_or_default()
}

/// Set `<html lang>` to `lang`.
pub fn apply(lang: Lang) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("lang", lang.code());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = lang;
    }
}

/// Apply `lang` and persist it.
pub fn save(lang: Lang) -> Lang {
    apply(lang);
    storage::set_item(STORAGE_KEY, lang.code());
    lang
}
