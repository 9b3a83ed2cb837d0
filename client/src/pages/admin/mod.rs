//! Admin console pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page here renders inside `AdminLayout`, which owns the admin guard.
//! Lists delete after a confirmation step and drop the row locally; forms
//! navigate back to their list on success and show the server's message
//! verbatim on failure.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod courses;
pub mod dashboard;
pub mod lessons;
pub mod packages;
pub mod quizzes;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::error::ApiError;
use crate::state::ui::UiState;

/// Remove the item whose key is `id`. Returns whether anything was removed.
pub fn remove_by_id<T>(items: &mut Vec<T>, id: &str, key: fn(&T) -> &str) -> bool {
    let before = items.len();
    items.retain(|item| key(item) != id);
    items.len() != before
}

/// `/admin/<section>/<id>/edit` target for a row.
pub fn edit_href(section: &str, id: &str) -> String {
    format!("/admin/{section}/{}/edit", urlencoding::encode(id))
}

/// The `:id` route parameter, absent on the "new" routes.
pub fn use_edit_id() -> Memo<Option<String>> {
    let params = use_params_map();
    Memo::new(move |_| params.with(|p| p.get("id")).filter(|id| !id.is_empty()))
}

/// Delete `id` after confirmation, then drop it from `items`.
///
/// Failures land in `error`; the row stays.
pub fn confirm_and_delete<T, Fut>(
    pending: RwSignal<Option<String>>,
    items: RwSignal<Vec<T>>,
    error: RwSignal<Option<String>>,
    key: fn(&T) -> &str,
    delete: fn(String) -> Fut,
) -> Callback<String>
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    let ui = expect_context::<RwSignal<UiState>>();
    Callback::new(move |id: String| {
        pending.set(None);
        leptos::task::spawn_local(async move {
            match delete(id.clone()).await {
                Ok(()) => {
                    items.update(|list| {
                        remove_by_id(list, &id, key);
                    });
                }
                Err(e) => error.set(Some(e.localized(ui.get_untracked().lang))),
            }
        });
    })
}

/// Confirmation modal shown while `pending` holds an id.
#[component]
pub fn DeletePrompt(pending: RwSignal<Option<String>>, on_delete: Callback<String>) -> impl IntoView {
    let on_confirm = Callback::new(move |()| {
        if let Some(id) = pending.get_untracked() {
            on_delete.run(id);
        }
    });
    let on_cancel = Callback::new(move |()| pending.set(None));

    view! {
        <Show when=move || pending.with(Option::is_some)>
            <ConfirmDialog on_confirm on_cancel/>
        </Show>
    }
}

/// List page header with a "new" link.
#[component]
pub fn ListHeader(title_key: &'static str, new_href: &'static str) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    view! {
        <header class="admin-page__header">
            <h1>{move || ui.get().t(title_key)}</h1>
            <a class="btn btn--primary" href=new_href>
                {move || format!("+ {}", ui.get().t("newItem"))}
            </a>
        </header>
    }
}

/// Banner for load, save and delete failures.
#[component]
pub fn ErrorBanner(error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some)>
            <p class="alert alert--error">{move || error.get().unwrap_or_default()}</p>
        </Show>
    }
}
