//! Student registration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits the multipart form to `/auth/register`, pulls the new user's id
//! out of the confirmation text, and continues to email verification with
//! that id in the query string.

use leptos::html::Input;
use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::text_field::{TextField, bind_field};
use crate::forms::auth::{RegisterForm, format_phone, parse_registered_user_id};
use crate::net::api_auth;
use crate::net::types::Sector;
use crate::state::ui::UiState;
use crate::util::dom;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let form = RwSignal::new(RegisterForm::default());
    let show_password = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let picture_ref = NodeRef::<Input>::new();
    let redirect = RwSignal::new(None::<String>);
    dom::install_redirect(redirect);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let lang = ui.get().lang;
        let body = match form.get().to_form(dom::selected_file(picture_ref)) {
            Ok(body) => body,
            Err(e) => {
                info.set(e.localized(lang));
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        leptos::task::spawn_local(async move {
            let outcome = api_auth::register(body).await;
            busy.set(false);
            match outcome {
                Ok(text) => match parse_registered_user_id(&text) {
                    Ok(user_id) => redirect.set(Some(format!("/verify-email?userId={user_id}"))),
                    Err(e) => info.set(e.localized(lang)),
                },
                Err(e) => {
                    let message = e
                        .server_message()
                        .map_or_else(|| ui.get_untracked().t("registrationFailed"), str::to_owned);
                    info.set(message);
                }
            }
        });
    };

    let tr = move |key: &'static str| ui.get().t(key);
    let label = move |key: &'static str| Signal::derive(move || tr(key));

    let (username, set_username) = bind_field(form, |f| f.username.clone(), |f, v| f.username = v);
    let (first_name, set_first_name) = bind_field(form, |f| f.first_name.clone(), |f, v| f.first_name = v);
    let (last_name, set_last_name) = bind_field(form, |f| f.last_name.clone(), |f, v| f.last_name = v);
    let (email, set_email) = bind_field(form, |f| f.email.clone(), |f, v| f.email = v);
    let (phone, set_phone) = bind_field(form, |f| f.phone.clone(), |f, v| f.phone = format_phone(&v));

    view! {
        <Navbar/>
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1>{move || tr("register")}</h1>
                <form class="auth-form" on:submit=on_submit>
                    <TextField label=label("username") value=username on_input=set_username/>
                    <label class="field">
                        <span class="field__label">{move || tr("password")}</span>
                        <span class="auth-form__password">
                            <input
                                class="field__input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                autocomplete="new-password"
                                prop:value=move || form.get().password
                                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
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
                    <div class="auth-form__row">
                        <TextField label=label("firstName") value=first_name on_input=set_first_name/>
                        <TextField label=label("lastName") value=last_name on_input=set_last_name/>
                    </div>
                    <TextField label=label("email") value=email on_input=set_email input_type="email"/>
                    <TextField
                        label=label("phoneNumber")
                        value=phone
                        on_input=set_phone
                        input_type="tel"
                        placeholder="50 123 45 67"
                    />
                    <div class="auth-form__row">
                        <label class="field">
                            <span class="field__label">{move || tr("group")}</span>
                            <select
                                class="field__input"
                                prop:value=move || form.get().group.to_string()
                                on:change=move |ev| {
                                    let group = event_target_value(&ev).parse().unwrap_or(1);
                                    form.update(|f| f.group = group);
                                }
                            >
                                {(1..=4_u8)
                                    .map(|g| view! { <option value=g.to_string()>{g}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        <label class="field">
                            <span class="field__label">{move || tr("sector")}</span>
                            <select
                                class="field__input"
                                prop:value=move || form.get().sector.code().to_string()
                                on:change=move |ev| {
                                    let sector = event_target_value(&ev)
                                        .parse()
                                        .ok()
                                        .and_then(Sector::from_code)
                                        .unwrap_or_default();
                                    form.update(|f| f.sector = sector);
                                }
                            >
                                {Sector::ALL
                                    .into_iter()
                                    .map(|s| view! { <option value=s.code().to_string()>{s.name()}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                    </div>
                    <label class="field">
                        <span class="field__label">{move || tr("profilePicture")}</span>
                        <input class="field__input" type="file" accept="image/*" node_ref=picture_ref/>
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { tr("registering") } else { tr("register") }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="alert alert--error">{move || info.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    {move || tr("alreadyHaveAccount")}
                    " "
                    <a href="/login">{move || tr("login")}</a>
                </p>
            </div>
        </div>
    }
}
