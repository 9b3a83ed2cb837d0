//! Profile view and edit.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `GET /auth/me`. Saving sends `PUT /user/{id}`, then refreshes the
//! access token so claims such as the username stay current. A refresh
//! failure is not an error for the user; the old token stays in place.
//!
//! ERROR HANDLING
//! ==============
//! Validation errors from the backend arrive per field and render inline
//! under the matching input. Anything else shows as one banner.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::text_field::{TextField, bind_field};
use crate::forms::auth::ProfileForm;
use crate::net::api_auth;
use crate::net::error::ApiError;
use crate::net::types::{Me, Sector};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::install_unauth_redirect;
use crate::util::token;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    install_unauth_redirect(auth, use_navigate());

    let me = RwSignal::new(None::<Me>);
    let form = RwSignal::new(ProfileForm::default());
    let editing = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let banner = RwSignal::new(None::<String>);
    let server_error = RwSignal::new(None::<ApiError>);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if !auth.with(AuthState::is_authenticated) || requested.get_untracked() {
            return;
        }
        requested.set(true);
        leptos::task::spawn_local(async move {
            match api_auth::me().await {
                Ok(user) => me.set(Some(user)),
                Err(e) => banner.set(Some(e.localized(ui.get_untracked().lang))),
            }
        });
    });

    let start_edit = move |_| {
        if let Some(user) = me.get_untracked() {
            form.set(ProfileForm::from(&user));
            server_error.set(None);
            banner.set(None);
            editing.set(true);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(user_id) = me.with_untracked(|m| m.as_ref().map(|m| m.id.clone())) else {
            return;
        };
        let lang = ui.get_untracked().lang;
        let body = match form.with_untracked(ProfileForm::to_form) {
            Ok(body) => body,
            Err(e) => {
                banner.set(Some(e.localized(lang)));
                return;
            }
        };
        busy.set(true);
        banner.set(None);
        server_error.set(None);

        leptos::task::spawn_local(async move {
            match api_auth::update_user(&user_id, body).await {
                Ok(()) => {
                    refresh_access_token().await;
                    auth.set(AuthState::load());
                    if let Ok(user) = api_auth::me().await {
                        me.set(Some(user));
                    }
                    editing.set(false);
                }
                Err(e) => {
                    if matches!(e, ApiError::Validation { .. }) {
                        banner.set(Some(ui.get_untracked().t("profileUpdateError")));
                    } else {
                        banner.set(Some(e.localized(lang)));
                    }
                    server_error.set(Some(e));
                }
            }
            busy.set(false);
        });
    };

    let tr = move |key: &'static str| ui.get().t(key);
    let label = move |key: &'static str| Signal::derive(move || tr(key));
    let field_error = move |field: &'static str| {
        MaybeProp::derive(move || server_error.with(|e| e.as_ref().and_then(|e| e.field_error(field)).map(str::to_owned)))
    };

    let (username, set_username) = bind_field(form, |f| f.username.clone(), |f, v| f.username = v);
    let (first_name, set_first_name) = bind_field(form, |f| f.first_name.clone(), |f, v| f.first_name = v);
    let (last_name, set_last_name) = bind_field(form, |f| f.last_name.clone(), |f, v| f.last_name = v);
    let (email, set_email) = bind_field(form, |f| f.email.clone(), |f, v| f.email = v);
    let (phone, set_phone) = bind_field(form, |f| f.phone_number.clone(), |f, v| f.phone_number = v);

    view! {
        <Navbar/>
        <main class="page profile-page">
            <h1 class="page__title">{move || tr("profileInformation")}</h1>
            <Show when=move || banner.get().is_some()>
                <p class="alert alert--error">{move || banner.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || editing.get()
                fallback=move || {
                    view! {
                        <Show
                            when=move || me.with(Option::is_some)
                            fallback=move || view! { <p class="page-status">{move || tr("loading")}</p> }
                        >
                            <ProfileDetails me/>
                            <button class="btn" on:click=start_edit>{move || tr("editProfile")}</button>
                        </Show>
                    }
                }
            >
                <form class="profile-form" on:submit=on_submit>
                    <TextField label=label("username") value=username on_input=set_username error=field_error("Username")/>
                    <div class="auth-form__row">
                        <TextField
                            label=label("firstName")
                            value=first_name
                            on_input=set_first_name
                            error=field_error("FirstName")
                        />
                        <TextField
                            label=label("lastName")
                            value=last_name
                            on_input=set_last_name
                            error=field_error("LastName")
                        />
                    </div>
                    <TextField
                        label=label("email")
                        value=email
                        on_input=set_email
                        input_type="email"
                        error=field_error("Email")
                    />
                    <TextField
                        label=label("phoneNumber")
                        value=phone
                        on_input=set_phone
                        input_type="tel"
                        error=field_error("PhoneNumber")
                    />
                    <div class="auth-form__row">
                        <label class="field">
                            <span class="field__label">{move || tr("group")}</span>
                            <select
                                class="field__input"
                                prop:value=move || form.with(|f| f.group.to_string())
                                on:change=move |ev| {
                                    let group = event_target_value(&ev).parse().unwrap_or(1);
                                    form.update(|f| f.group = group);
                                }
                            >
                                {(1..=4_i32)
                                    .map(|g| view! { <option value=g.to_string()>{g}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        <label class="field">
                            <span class="field__label">{move || tr("sector")}</span>
                            <select
                                class="field__input"
                                prop:value=move || form.with(|f| f.sector.clone())
                                on:change=move |ev| form.update(|f| f.sector = event_target_value(&ev))
                            >
                                {Sector::ALL
                                    .into_iter()
                                    .map(|s| view! { <option value=s.name()>{s.name()}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                    </div>
                    <div class="form-actions">
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { tr("saving") } else { tr("save") }}
                        </button>
                        <button class="btn btn--secondary" type="button" on:click=move |_| editing.set(false)>
                            {move || tr("cancel")}
                        </button>
                    </div>
                </form>
            </Show>
        </main>
    }
}

#[component]
fn ProfileDetails(me: RwSignal<Option<Me>>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let row = move |key: &'static str, value: fn(&Me) -> String| {
        view! {
            <div class="profile-details__row">
                <dt>{move || ui.get().t(key)}</dt>
                <dd>{move || me.with(|m| m.as_ref().map(value).unwrap_or_default())}</dd>
            </div>
        }
    };

    view! {
        <div class="profile-details">
            {move || {
                me.with(|m| m.as_ref().and_then(|m| m.profile_picture_url.clone()))
                    .map(|src| view! { <img class="profile-details__avatar" src=src alt=""/> })
            }}
            <dl>
                {row("username", |m| m.username.clone())}
                {row("firstName", |m| m.first_name.clone())}
                {row("lastName", |m| m.last_name.clone())}
                {row("email", |m| m.email.clone())}
                {row("phoneNumber", |m| m.phone_number.clone())}
                {row("group", |m| m.group.to_string())}
                {row("sector", |m| m.sector.clone())}
            </dl>
        </div>
    }
}

/// Swap in a fresh access token when the backend hands one back.
async fn refresh_access_token() {
    let Some(refresh) = token::refresh_token() else {
        return;
    };
    if let Ok(resp) = api_auth::refresh(&refresh).await {
        if let Some(access) = resp.access_token {
            token::set_access_token(&access);
        }
    }
}
