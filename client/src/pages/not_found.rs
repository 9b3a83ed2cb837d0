use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::state::ui::UiState;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    view! {
        <Navbar/>
        <main class="page page--centered">
            <h1 class="page__title">"404"</h1>
            <p class="muted">{move || ui.get().t("notFound")}</p>
            <a class="btn" href="/">{move || ui.get().t("home")}</a>
        </main>
    }
}
