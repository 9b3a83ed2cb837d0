//! Top navigation bar shared by every public and student page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the auth session to choose between guest links (register, login)
//! and member links (dashboard, packages, profile, logout). The admin link
//! only appears for admin tokens. On narrow screens the links collapse behind
//! a menu toggle held in [`UiState`].

use leptos::prelude::*;

use crate::components::language_selector::LanguageSelector;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::token;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let tr = move |key: &'static str| ui.get().t(key);
    let signed_in = move || auth.get().is_authenticated();
    let close_menu = move |_| ui.update(|u| u.menu_open = false);

    // The link itself routes to /login.
    let on_logout = move |_| {
        token::clear_tokens();
        auth.set(AuthState::from_claims(None, token::now_secs()));
        ui.update(|u| u.menu_open = false);
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"Novademy"</a>
            <button
                class="navbar__toggle"
                aria-label="Menu"
                on:click=move |_| ui.update(|u| u.menu_open = !u.menu_open)
            >
                "☰"
            </button>
            <div class="navbar__links" class:navbar__links--open=move || ui.get().menu_open>
                <Show
                    when=signed_in
                    fallback=move || {
                        view! {
                            <a class="navbar__link" href="/register" on:click=close_menu>
                                {move || tr("register")}
                            </a>
                            <a class="navbar__link" href="/login" on:click=close_menu>
                                {move || tr("login")}
                            </a>
                        }
                    }
                >
                    <a class="navbar__link" href="/dashboard" on:click=close_menu>
                        {move || tr("dashboard")}
                    </a>
                    <a class="navbar__link" href="/packages" on:click=close_menu>
                        {move || tr("packages")}
                    </a>
                    <a class="navbar__link" href="/profile" on:click=close_menu>
                        {move || tr("profile")}
                    </a>
                    <Show when=move || auth.get().is_admin()>
                        <a class="navbar__link" href="/admin" on:click=close_menu>
                            {move || tr("admin")}
                        </a>
                    </Show>
                    <a class="navbar__link navbar__logout" href="/login" on:click=on_logout>
                        {move || tr("logout")}
                    </a>
                </Show>
                <LanguageSelector/>
            </div>
        </nav>
    }
}
