//! Landing hero banner.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[component]
pub fn Hero() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let cta_href = move || if auth.get().is_authenticated() { "/dashboard" } else { "/register" };

    view! {
        <section class="hero">
            <div class="hero__text">
                <h1 class="hero__title">{move || ui.get().t("heroTitle")}</h1>
                <p class="hero__subtitle">{move || ui.get().t("heroSubtitle")}</p>
                <a class="btn btn--primary btn--large" href=cta_href>
                    {move || ui.get().t("getStarted")}
                </a>
            </div>
            <img class="hero__image" src="/student.png" alt=""/>
        </section>
    }
}
