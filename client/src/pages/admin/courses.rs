//! Admin course list and course form.

use leptos::html::Input;
use leptos::prelude::*;

use super::{DeletePrompt, ErrorBanner, ListHeader, confirm_and_delete, edit_href, use_edit_id};
use crate::components::text_field::{TextField, bind_field};
use crate::forms::admin::CourseForm;
use crate::net::api_catalog;
use crate::net::types::{Course, SubjectType};
use crate::state::ui::UiState;
use crate::util::{dom, format};

#[component]
pub fn AdminCoursesPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let courses = RwSignal::new(Vec::<Course>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(None::<String>);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match api_catalog::courses().await {
                Ok(list) => courses.set(list),
                Err(e) => error.set(Some(e.localized(ui.get_untracked().lang))),
            }
            loading.set(false);
        });
    });

    let on_delete = confirm_and_delete(pending, courses, error, |c: &Course| c.id.as_str(), |id| async move {
        api_catalog::delete_course(&id).await
    });
    let tr = move |key: &'static str| ui.get().t(key);

    view! {
        <section class="admin-page">
            <ListHeader title_key="courses" new_href="/admin/courses/new"/>
            <ErrorBanner error/>
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="page-status">{move || tr("loading")}</p> }
            >
                <Show
                    when=move || !courses.with(Vec::is_empty)
                    fallback=move || view! { <p class="page-status">{move || tr("noItems")}</p> }
                >
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>{move || tr("title")}</th>
                                <th>{move || tr("subject")}</th>
                                <th>{move || tr("updatedAt")}</th>
                                <th>{move || tr("actions")}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                courses
                                    .get()
                                    .into_iter()
                                    .map(|course| {
                                        let id = course.id.clone();
                                        let href = edit_href("courses", &id);
                                        let updated = course
                                            .updated_at
                                            .or(course.created_at)
                                            .map(|raw| format::format_date(&raw))
                                            .unwrap_or_default();
                                        view! {
                                            <tr>
                                                <td>{course.title}</td>
                                                <td>{course.subject.as_str()}</td>
                                                <td>{updated}</td>
                                                <td class="admin-table__actions">
                                                    <a class="btn btn--small" href=href>
                                                        {move || tr("edit")}
                                                    </a>
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
pub fn AdminCourseFormPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let edit_id = use_edit_id();
    let form = RwSignal::new(CourseForm::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let image_ref = NodeRef::<Input>::new();
    let redirect = RwSignal::new(None::<String>);
    dom::install_redirect(redirect);

    Effect::new(move || {
        let Some(id) = edit_id.get() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api_catalog::course(&id).await {
                Ok(course) => form.set(CourseForm::from(&course)),
                Err(e) => error.set(Some(e.localized(ui.get_untracked().lang))),
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let lang = ui.get_untracked().lang;
        let body = match form.with_untracked(|f| f.to_form(dom::selected_file(image_ref))) {
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
                Some(id) => api_catalog::update_course(&id, body).await,
                None => api_catalog::create_course(body).await,
            };
            busy.set(false);
            match result {
                Ok(()) => redirect.set(Some("/admin/courses".to_owned())),
                Err(e) => error.set(Some(e.localized(lang))),
            }
        });
    };

    let tr = move |key: &'static str| ui.get().t(key);
    let label = move |key: &'static str| Signal::derive(move || tr(key));
    let (title, set_title) = bind_field(form, |f| f.title.clone(), |f, v| f.title = v);
    let (description, set_description) = bind_field(form, |f| f.description.clone(), |f, v| f.description = v);

    view! {
        <section class="admin-page">
            <h1>{move || if edit_id.get().is_some() { tr("editCourse") } else { tr("newCourse") }}</h1>
            <ErrorBanner error/>
            <form class="admin-form" on:submit=on_submit>
                <TextField label=label("title") value=title on_input=set_title/>
                <TextField label=label("description") value=description on_input=set_description multiline=true/>
                <label class="field">
                    <span class="field__label">{move || tr("subject")}</span>
                    <select
                        class="field__input"
                        prop:value=move || form.with(|f| f.subject.as_str())
                        on:change=move |ev| form.update(|f| f.subject = SubjectType::parse(&event_target_value(&ev)))
                    >
                        {SubjectType::SELECTABLE
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="field">
                    <span class="field__label">{move || tr("image")}</span>
                    <input class="field__input" type="file" accept="image/*" node_ref=image_ref/>
                </label>
                <div class="form-actions">
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { tr("saving") } else { tr("save") }}
                    </button>
                    <a class="btn btn--secondary" href="/admin/courses">{move || tr("cancel")}</a>
                </div>
            </form>
        </section>
    }
}
