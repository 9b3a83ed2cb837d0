//! FAQ accordion. At most one answer is open at a time.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

use leptos::prelude::*;

use crate::state::ui::UiState;

const ITEMS: [(&str, &str); 3] = [("faq1Q", "faq1A"), ("faq2Q", "faq2A"), ("faq3Q", "faq3A")];

/// Open item after clicking `index`: clicking the open item closes it.
pub fn toggle_item(open: Option<usize>, index: usize) -> Option<usize> {
    if open == Some(index) { None } else { Some(index) }
}

#[component]
pub fn Faq() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let open = RwSignal::new(None::<usize>);

    view! {
        <section class="faq">
            <h2 class="section-title">{move || ui.get().t("faqTitle")}</h2>
            <div class="faq__list">
                {ITEMS
                    .into_iter()
                    .enumerate()
                    .map(|(index, (question, answer))| {
                        let is_open = move || open.get() == Some(index);
                        view! {
                            <div class="faq__item" class:faq__item--open=is_open>
                                <button
                                    class="faq__question"
                                    aria-expanded=move || is_open().to_string()
                                    on:click=move |_| open.update(|o| *o = toggle_item(*o, index))
                                >
                                    {move || ui.get().t(question)}
                                </button>
                                <Show when=is_open>
                                    <p class="faq__answer">{move || ui.get().t(answer)}</p>
                                </Show>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
