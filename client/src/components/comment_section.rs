//! Lesson comments: list, add and delete-own.
//!
//! New comments are appended from the POST response and deletions drop the
//! row locally; the list is only fetched when the lesson changes.

#[cfg(test)]
#[path = "comment_section_test.rs"]
mod comment_section_test;

use leptos::prelude::*;

use crate::net::api_student;
use crate::net::types::Comment;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::format::format_datetime;

/// Avatar letter for `user_name`.
pub fn initial(user_name: &str) -> String {
    user_name
        .trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

/// Only the author may delete a comment.
pub fn can_delete(comment: &Comment, user_id: Option<&str>) -> bool {
    user_id.is_some_and(|id| !id.is_empty() && id == comment.user_id)
}

#[component]
pub fn CommentSection(#[prop(into)] lesson_id: Signal<String>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let comments = RwSignal::new(Vec::<Comment>::new());
    let loading = RwSignal::new(true);
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let draft = RwSignal::new(String::new());

    Effect::new(move || {
        let id = lesson_id.get();
        if id.is_empty() {
            return;
        }
        loading.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api_student::comments(&id).await {
                Ok(list) => comments.set(list),
                Err(e) => error.set(Some(e.localized(ui.get_untracked().lang))),
            }
            loading.set(false);
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get_untracked().trim().to_owned();
        if text.is_empty() || submitting.get_untracked() {
            return;
        }
        submitting.set(true);
        let id = lesson_id.get_untracked();
        leptos::task::spawn_local(async move {
            match api_student::add_comment(&id, &text).await {
                Ok(comment) => {
                    comments.update(|list| list.push(comment));
                    draft.set(String::new());
                    error.set(None);
                }
                Err(e) => error.set(Some(e.localized(ui.get_untracked().lang))),
            }
            submitting.set(false);
        });
    };

    let on_delete = Callback::new(move |comment_id: String| {
        leptos::task::spawn_local(async move {
            match api_student::delete_comment(&comment_id).await {
                Ok(()) => comments.update(|list| list.retain(|c| c.id != comment_id)),
                Err(e) => error.set(Some(e.localized(ui.get_untracked().lang))),
            }
        });
    });

    let tr = move |key: &'static str| ui.get().t(key);

    view! {
        <section class="comments">
            <h3 class="comments__title">{move || tr("comments")}</h3>
            <Show when=move || error.get().is_some()>
                <p class="alert alert--error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <form class="comments__form" on:submit=on_submit>
                <textarea
                    class="comments__input"
                    rows="3"
                    placeholder=move || tr("writeComment")
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    disabled=move || submitting.get()
                ></textarea>
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || submitting.get() || draft.get().trim().is_empty()
                >
                    {move || if submitting.get() { tr("sending") } else { tr("send") }}
                </button>
            </form>
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="comments__loading">{move || tr("loading")}</p> }
            >
                <Show
                    when=move || !comments.get().is_empty()
                    fallback=move || view! { <p class="comments__empty">{move || tr("noComments")}</p> }
                >
                    <ul class="comments__list">
                        {move || {
                            let user_id = auth.get().user_id().map(str::to_owned);
                            comments
                                .get()
                                .into_iter()
                                .map(|c| {
                                    let deletable = can_delete(&c, user_id.as_deref());
                                    let id = c.id.clone();
                                    view! {
                                        <li class="comments__item">
                                            <span class="comments__avatar">{initial(&c.user_name)}</span>
                                            <div class="comments__body">
                                                <p class="comments__author">{c.user_name}</p>
                                                <p class="comments__date">{format_datetime(&c.created_at)}</p>
                                                <p class="comments__text">{c.text}</p>
                                            </div>
                                            <Show when=move || deletable>
                                                <button
                                                    class="btn btn--link btn--danger"
                                                    on:click={
                                                        let id = id.clone();
                                                        move |_| on_delete.run(id.clone())
                                                    }
                                                >
                                                    {move || tr("delete")}
                                                </button>
                                            </Show>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </Show>
        </section>
    }
}
