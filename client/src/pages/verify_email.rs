//! Email verification with a four-digit code.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from registration as `/verify-email?userId=<guid>`. Typing a digit
//! advances focus to the next box and Backspace in an empty box moves back.
//! Success, or an already-verified account, continues to `/login`.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::navbar::Navbar;
use crate::forms::auth::{CODE_DIGITS, CodeInput, VerifyFailure, validate_verification};
use crate::net::api_auth;
use crate::state::ui::UiState;
use crate::util::dom;

const SUCCESS_REDIRECT_MS: u32 = 2_000;

fn box_id(index: usize) -> String {
    format!("verify-code-{index}")
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let query = use_query_map();
    let user_id = Signal::derive(move || query.with(|q| q.get("userId")).unwrap_or_default());

    let code = RwSignal::new(CodeInput::default());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let redirect = RwSignal::new(None::<String>);
    dom::install_redirect(redirect);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let lang = ui.get().lang;
        let (id, digits) = match validate_verification(&user_id.get(), &code.get().code()) {
            Ok(pair) => pair,
            Err(e) => {
                error.set(e.localized(lang));
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        leptos::task::spawn_local(async move {
            match api_auth::verify_email(&id, &digits).await {
                Ok(_) => {
                    success.set(ui.get_untracked().t("emailVerifiedSuccess"));
                    dom::sleep_ms(SUCCESS_REDIRECT_MS).await;
                    redirect.set(Some("/login".to_owned()));
                }
                Err(e) => {
                    let failure = VerifyFailure::classify(e.server_message());
                    error.set(failure.text(lang));
                    busy.set(false);
                    if failure.redirects_to_login() {
                        dom::sleep_ms(SUCCESS_REDIRECT_MS).await;
                        redirect.set(Some("/login".to_owned()));
                    }
                }
            }
        });
    };

    let tr = move |key: &'static str| ui.get().t(key);

    view! {
        <Navbar/>
        <div class="auth-page">
            <div class="auth-card">
                <h1>{move || tr("emailVerification")}</h1>
                <Show
                    when=move || !user_id.get().is_empty()
                    fallback=move || view! { <p class="alert alert--error">{move || tr("noUserIdProvided")}</p> }
                >
                    <p class="muted">{move || tr("verificationCodeHint")}</p>
                    <form class="auth-form" on:submit=on_submit>
                        <div class="code-input">
                            {(0..CODE_DIGITS)
                                .map(|index| {
                                    view! {
                                        <input
                                            class="code-input__box"
                                            id=box_id(index)
                                            type="text"
                                            inputmode="numeric"
                                            maxlength="1"
                                            autocomplete="one-time-code"
                                            prop:value=move || code.get().digits[index].clone()
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                let next = code.try_update(|c| c.set_digit(index, &value)).flatten();
                                                if let Some(next) = next {
                                                    dom::focus_by_id(&box_id(next));
                                                }
                                            }
                                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                                if ev.key() == "Backspace" {
                                                    if let Some(prev) = code.get_untracked().backspace_target(index) {
                                                        dom::focus_by_id(&box_id(prev));
                                                    }
                                                }
                                            }
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || tr("verify")}
                        </button>
                    </form>
                </Show>
                <Show when=move || !error.get().is_empty()>
                    <p class="alert alert--error">{move || error.get()}</p>
                </Show>
                <Show when=move || !success.get().is_empty()>
                    <p class="alert alert--success">{move || success.get()}</p>
                </Show>
            </div>
        </div>
    }
}
