//! Username + password login.
//!
//! On success the token pair is stored, the session signal is refreshed, and
//! the active subscriptions decide between `/dashboard` and `/packages`.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::forms::auth::{post_login_destination, validate_login};
use crate::net::api_auth;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::{dom, token};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let redirect = RwSignal::new(None::<String>);
    dom::install_redirect(redirect);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let lang = ui.get().lang;
        let (user, pass) = match validate_login(&username.get(), &password.get()) {
            Ok(pair) => pair,
            Err(e) => {
                info.set(e.localized(lang));
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        leptos::task::spawn_local(async move {
            match api_auth::login(&user, &pass).await {
                Ok(pair) => {
                    token::store_tokens(&pair);
                    let session = AuthState::load();
                    let user_id = session.user_id().map(str::to_owned);
                    auth.set(session);
                    let subscriptions = match user_id {
                        Some(id) => api_auth::active_subscriptions(&id).await,
                        None => Ok(Vec::new()),
                    };
                    redirect.set(Some(post_login_destination(&subscriptions).to_owned()));
                }
                Err(e) => {
                    let message = e.server_message().map_or_else(|| ui.get_untracked().t("loginFailed"), str::to_owned);
                    info.set(message);
                }
            }
            busy.set(false);
        });
    };

    let tr = move |key: &'static str| ui.get().t(key);

    view! {
        <Navbar/>
        <div class="auth-page">
            <div class="auth-card">
                <h1>{move || tr("login")}</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        {move || tr("username")}
                        <input
                            class="auth-form__input"
                            type="text"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        {move || tr("password")}
                        <span class="auth-form__password">
                            <input
                                class="auth-form__input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                autocomplete="current-password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                class="btn btn--link"
                                type="button"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { tr("hidePassword") } else { tr("showPassword") }}
                            </button>
                        </span>
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { tr("loggingIn") } else { tr("login") }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="alert alert--error">{move || info.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    {move || tr("noAccount")}
                    " "
                    <a href="/register">{move || tr("register")}</a>
                </p>
            </div>
        </div>
    }
}
