//! Landing feature highlights.

use leptos::prelude::*;

use crate::state::ui::UiState;

const FEATURES: [(&str, &str, &str); 3] = [
    ("🎬", "featureVideoTitle", "featureVideoText"),
    ("📝", "featureQuizTitle", "featureQuizText"),
    ("💬", "featureChatTitle", "featureChatText"),
];

#[component]
pub fn Features() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <section class="features">
            <h2 class="section-title">{move || ui.get().t("featuresTitle")}</h2>
            <div class="features__grid">
                {FEATURES
                    .into_iter()
                    .map(|(icon, title, text)| {
                        view! {
                            <article class="feature-card">
                                <span class="feature-card__icon">{icon}</span>
                                <h3>{move || ui.get().t(title)}</h3>
                                <p>{move || ui.get().t(text)}</p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
