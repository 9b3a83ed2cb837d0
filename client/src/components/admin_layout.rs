//! Admin console chrome: section sidebar plus the routed content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every `/admin/*` route. The guard sends signed-out visitors to
//! `/login` and non-admin tokens home; nothing inside renders until the
//! session is known to be an admin one.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::install_admin_redirect;

const SECTIONS: [(&str, &str); 5] = [
    ("/admin/dashboard", "dashboard"),
    ("/admin/courses", "courses"),
    ("/admin/lessons", "lessons"),
    ("/admin/quizzes", "quizzes"),
    ("/admin/packages", "packages"),
];

#[component]
pub fn AdminLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;
    install_admin_redirect(auth, use_navigate());

    view! {
        <Show
            when=move || auth.get().is_admin()
            fallback=move || view! { <p class="page-status">{move || ui.get().t("loading")}</p> }
        >
            <div class="admin-layout">
                <aside class="admin-layout__sidebar">
                    <a class="admin-layout__brand" href="/">"Novademy"</a>
                    <p class="admin-layout__heading">{move || ui.get().t("adminPanel")}</p>
                    <nav class="admin-layout__nav">
                        {SECTIONS
                            .into_iter()
                            .map(|(href, key)| {
                                let active = move || pathname.get().starts_with(href);
                                view! {
                                    <a class="admin-layout__link" class:admin-layout__link--active=active href=href>
                                        {move || ui.get().t(key)}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </nav>
                </aside>
                <main class="admin-layout__content">
                    <Outlet/>
                </main>
            </div>
        </Show>
    }
}
