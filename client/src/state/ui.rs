//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns (active language, mobile menu) out of domain
//! state so rendering controls can evolve independently of API data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::i18n::{Lang, t};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub lang: Lang,
    pub menu_open: bool,
}

impl UiState {
    /// Translate `key` in the active language.
    pub fn t(&self, key: &str) -> String {
        t(self.lang, key).to_owned()
    }
}
