//! Admin lesson list and lesson form.

use leptos::html::Input;
use leptos::prelude::*;

use super::{DeletePrompt, ErrorBanner, ListHeader, confirm_and_delete, edit_href, use_edit_id};
use crate::components::text_field::{TextField, bind_field};
use crate::forms::admin::LessonForm;
use crate::net::api_catalog;
use crate::net::types::{Course, Lesson};
use crate::state::ui::UiState;
use crate::util::dom;

/// Title of `course_id` in `courses`, or the id itself.
fn course_title(courses: &[Course], course_id: &str) -> String {
    courses
        .iter()
        .find(|c| c.id == course_id)
        .map_or_else(|| course_id.to_owned(), |c| c.title.clone())
}

#[component]
pub fn AdminLessonsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let lessons = RwSignal::new(Vec::<Lesson>::new());
    let courses = RwSignal::new(Vec::<Course>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(None::<String>);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match api_catalog::lessons().await {
                Ok(list) => lessons.set(list),
                Err(e) => error.set(Some(e.localized(ui.get_untracked().lang))),
            }
            courses.set(api_catalog::courses().await.unwrap_or_default());
            loading.set(false);
        });
    });

    let on_delete = confirm_and_delete(pending, lessons, error, |l: &Lesson| l.id.as_str(), |id| async move {
        api_catalog::delete_lesson(&id).await
    });
    let tr = move |key: &'static str| ui.get().t(key);

    view! {
        <section class="admin-page">
            <ListHeader title_key="lessons" new_href="/admin/lessons/new"/>
            <ErrorBanner error/>
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="page-status">{move || tr("loading")}</p> }
            >
                <Show
                    when=move || !lessons.with(Vec::is_empty)
                    fallback=move || view! { <p class="page-status">{move || tr("noItems")}</p> }
                >
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>{move || tr("order")}</th>
                                <th>{move || tr("title")}</th>
                                <th>{move || tr("course")}</th>
                                <th>{move || tr("actions")}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let course_list = courses.get();
                                lessons
                                    .get()
                                    .into_iter()
                                    .map(|lesson| {
                                        let id = lesson.id.clone();
                                        let href = edit_href("lessons", &id);
                                        let course = course_title(&course_list, &lesson.course_id);
                                        view! {
                                            <tr>
                                                <td>{lesson.order}</td>
                                                <td>{lesson.title}</td>
                                                <td>{course}</td>
                                                <td class="admin-table__actions">
                                                    <a class="btn btn--small" href=href>{move || tr("edit")}</a>
                                                    <button
                                                        class="btn btn--small btn--danger"
                                                        on:click=move |_| pending.set(Some(id.clone()))
                                                    >
                                                        {move || tr("delete")}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>
            <DeletePrompt pending on_delete/>
        </section>
    }
}

#[component]
pub fn AdminLessonFormPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let edit_id = use_edit_id();
    let form = RwSignal::new(LessonForm::default());
    let courses = RwSignal::new(Vec::<Course>::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let video_ref = NodeRef::<Input>::new();
    let image_ref = NodeRef::<Input>::new();
    let redirect = RwSignal::new(None::<String>);
    dom::install_redirect(redirect);

    Effect::new(move || {
        let id = edit_id.get();
        leptos::task::spawn_local(async move {
            courses.set(api_catalog::courses().await.unwrap_or_default());
            if let Some(id) = id {
                match api_catalog::lesson(&id).await {
                    Ok(lesson) => form.set(LessonForm::from(&lesson)),
                    Err(e) => error.set(Some(e.localized(ui.get_untracked().lang))),
                }
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let lang = ui.get_untracked().lang;
        let files = (dom::selected_file(video_ref), dom::selected_file(image_ref));
        let body = match form.with_untracked(|f| f.to_form(files.0, files.1)) {
            Ok(body) => body,
            Err(e) => {
                error.set(Some(e.localized(lang)));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        let id = edit_id.get_untracked();
        leptos::task::spawn_local(async move {
            let result = match id {
                Some(id) => api_catalog::update_lesson(&id, body).await,
                None => api_catalog::create_lesson(body).await,
            };
            busy.set(false);
            match result {
                Ok(()) => redirect.set(Some("/admin/lessons".to_owned())),
                Err(e) => error.set(Some(e.localized(lang))),
            }
        });
    };

    let tr = move |key: &'static str| ui.get().t(key);
    let label = move |key: &'static str| Signal::derive(move || tr(key));
    let (title, set_title) = bind_field(form, |f| f.title.clone(), |f, v| f.title = v);
    let (description, set_description) = bind_field(form, |f| f.description.clone(), |f, v| f.description = v);
    let (order, set_order) = bind_field(form, |f| f.order.clone(), |f, v| f.order = v);
    let (content, set_content) = bind_field(form, |f| f.content.clone(), |f, v| f.content = v);
    let (transcript, set_transcript) = bind_field(form, |f| f.transcript.clone(), |f, v| f.transcript = v);

    view! {
        <section class="admin-page">
            <h1>{move || if edit_id.get().is_some() { tr("editLesson") } else { tr("newLesson") }}</h1>
            <ErrorBanner error/>
            <form class="admin-form" on:submit=on_submit>
                <TextField label=label("title") value=title on_input=set_title/>
                <TextField label=label("description") value=description on_input=set_description multiline=true/>
                <label class="field">
                    <span class="field__label">{move || tr("course")}</span>
                    <select
                        class="field__input"
                        prop:value=move || form.with(|f| f.course_id.clone())
                        on:change=move |ev| form.update(|f| f.course_id = event_target_value(&ev))
                    >
                        <option value="">{move || tr("selectCourse")}</option>
                        {move || {
                            courses
                                .get()
                                .into_iter()
                                .map(|c| view! { <option value=c.id>{c.title}</option> })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <TextField label=label("order") value=order on_input=set_order input_type="number"/>
                <TextField label=label("content") value=content on_input=set_content multiline=true/>
                <TextField label=label("transcript") value=transcript on_input=set_transcript multiline=true/>
                <label class="field">
                    <span class="field__label">{move || tr("video")}</span>
                    <input class="field__input" type="file" accept="video/*" node_ref=video_ref/>
                </label>
                <label class="field">
                    <span class="field__label">{move || tr("image")}</span>
                    <input class="field__input" type="file" accept="image/*" node_ref=image_ref/>
                </label>
                <div class="form-actions">
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { tr("saving") } else { tr("save") }}
                    </button>
                    <a class="btn btn--secondary" href="/admin/lessons">{move || tr("cancel")}</a>
                </div>
            </form>
        </section>
    }
}
