//! Site footer.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn Footer() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <footer class="footer">
            <div class="footer__brand">"Novademy"</div>
            <nav class="footer__links">
                <a href="/">{move || ui.get().t("home")}</a>
                <a href="/packages">{move || ui.get().t("packages")}</a>
                <a href="/login">{move || ui.get().t("login")}</a>
            </nav>
            <p class="footer__rights">"© Novademy. " {move || ui.get().t("footerRights")}</p>
        </footer>
    }
}
