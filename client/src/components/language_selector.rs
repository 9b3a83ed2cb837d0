//! Language picker that persists the choice across visits.

use leptos::prelude::*;

use crate::i18n::Lang;
use crate::state::ui::UiState;
use crate::util::lang_pref;

#[component]
pub fn LanguageSelector() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <select
            class="language-selector"
            aria-label=move || ui.get().t("language")
            prop:value=move || ui.get().lang.code()
            on:change=move |ev| {
                if let Some(lang) = Lang::from_code(&event_target_value(&ev)) {
                    let lang = lang_pref::save(lang);
                    ui.update(|u| u.lang = lang);
                }
            }
        >
            {Lang::ALL
                .into_iter()
                .map(|lang| view! { <option value=lang.code()>{lang.label()}</option> })
                .collect::<Vec<_>>()}
        </select>
    }
}
