//! Admin quiz list and quiz editor.
//!
//! The editor holds every question as a `QuestionDraft`; rows are rendered
//! by index and re-rendered whenever the question count changes.

use leptos::prelude::*;

use super::{DeletePrompt, ErrorBanner, ListHeader, confirm_and_delete, edit_href, use_edit_id};
use crate::components::text_field::{TextField, bind_field};
use crate::forms::admin::QuizForm;
use crate::net::api_catalog;
use crate::net::types::{Course, Lesson, Quiz};
use crate::state::quiz::option_letter;
use crate::state::ui::UiState;
use crate::util::dom;

#[component]
pub fn AdminQuizzesPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let quizzes = RwSignal::new(Vec::<Quiz>::new());
    let courses = RwSignal::new(Vec::<Course>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(None::<String>);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match api_catalog::quizzes(None, None).await {
                Ok(list) => quizzes.set(list),
                Err(e) => error.set(Some(e.localized(ui.get_untracked().lang))),
            }
            courses.set(api_catalog::courses().await.unwrap_or_default());
            loading.set(false);
        });
    });

    let on_delete = confirm_and_delete(pending, quizzes, error, |q: &Quiz| q.id.as_str(), |id| async move {
        api_catalog::delete_quiz(&id).await
    });
    let tr = move |key: &'static str| ui.get().t(key);

    view! {
        <section class="admin-page">
            <ListHeader title_key="quizzes" new_href="/admin/quizzes/new"/>
            <ErrorBanner error/>
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="page-status">{move || tr("loading")}</p> }
            >
                <Show
                    when=move || !quizzes.with(Vec::is_empty)
                    fallback=move || view! { <p class="page-status">{move || tr("noItems")}</p> }
                >
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>{move || tr("title")}</th>
                                <th>{move || tr("course")}</th>
                                <th>{move || tr("questions")}</th>
                                <th>{move || tr("passingScore")}</th>
                                <th>{move || tr("actions")}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let course_list = courses.get();
                                quizzes
                                    .get()
                                    .into_iter()
                                    .map(|quiz| {
                                        let id = quiz.id.clone();
                                        let href = edit_href("quizzes", &id);
                                        let course = course_list
                                            .iter()
                                            .find(|c| c.id == quiz.course_id)
                                            .map_or_else(|| quiz.course_id.clone(), |c| c.title.clone());
                                        view! {
                                            <tr>
                                                <td>{quiz.title}</td>
                                                <td>{course}</td>
                                                <td>{quiz.questions.len()}</td>
                                                <td>{format!("{}%", quiz.passing_score)}</td>
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
pub fn AdminQuizFormPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let edit_id = use_edit_id();
    let form = RwSignal::new(QuizForm::default());
    let courses = RwSignal::new(Vec::<Course>::new());
    let lessons = RwSignal::new(Vec::<Lesson>::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let redirect = RwSignal::new(None::<String>);
    dom::install_redirect(redirect);

    Effect::new(move || {
        let id = edit_id.get();
        leptos::task::spawn_local(async move {
            courses.set(api_catalog::courses().await.unwrap_or_default());
            if let Some(id) = id {
                match api_catalog::quiz(&id).await {
                    Ok(quiz) => form.set(QuizForm::from(&quiz)),
                    Err(e) => error.set(Some(e.localized(ui.get_untracked().lang))),
                }
            }
        });
    });

    // Lesson choices follow the selected course.
    let selected_course = Memo::new(move |_| form.with(|f| f.course_id.clone()));
    Effect::new(move || {
        let course_id = selected_course.get();
        if course_id.is_empty() {
            lessons.set(Vec::new());
            return;
        }
        leptos::task::spawn_local(async move {
            lessons.set(api_catalog::course_lessons(&course_id).await.unwrap_or_default());
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let lang = ui.get_untracked().lang;
        let input = match form.with_untracked(QuizForm::to_input) {
            Ok(input) => input,
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
                Some(id) => api_catalog::update_quiz(&id, &input).await,
                None => api_catalog::create_quiz(&input).await,
            };
            busy.set(false);
            match result {
                Ok(()) => redirect.set(Some("/admin/quizzes".to_owned())),
                Err(e) => error.set(Some(e.localized(lang))),
            }
        });
    };

    let tr = move |key: &'static str| ui.get().t(key);
    let label = move |key: &'static str| Signal::derive(move || tr(key));
    let (title, set_title) = bind_field(form, |f| f.title.clone(), |f, v| f.title = v);
    let (description, set_description) = bind_field(form, |f| f.description.clone(), |f, v| f.description = v);
    let (time_limit, set_time_limit) = bind_field(form, |f| f.time_limit.clone(), |f, v| f.time_limit = v);
    let (passing, set_passing) = bind_field(form, |f| f.passing_score.clone(), |f, v| f.passing_score = v);
    let question_count = Memo::new(move |_| form.with(|f| f.questions.len()));

    view! {
        <section class="admin-page">
            <h1>{move || if edit_id.get().is_some() { tr("editQuiz") } else { tr("newQuiz") }}</h1>
            <ErrorBanner error/>
            <form class="admin-form" on:submit=on_submit>
                <TextField label=label("title") value=title on_input=set_title/>
                <TextField label=label("description") value=description on_input=set_description multiline=true/>
                <div class="admin-form__row">
                    <label class="field">
                        <span class="field__label">{move || tr("course")}</span>
                        <select
                            class="field__input"
                            prop:value=move || selected_course.get()
                            on:change=move |ev| {
                                form.update(|f| {
                                    f.course_id = event_target_value(&ev);
                                    f.lesson_id.clear();
                                });
                            }
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
                    <label class="field">
                        <span class="field__label">{move || tr("lesson")}</span>
                        <select
                            class="field__input"
                            prop:value=move || form.with(|f| f.lesson_id.clone())
                            on:change=move |ev| form.update(|f| f.lesson_id = event_target_value(&ev))
                        >
                            <option value="">{move || tr("noLesson")}</option>
                            {move || {
                                lessons
                                    .get()
                                    .into_iter()
                                    .map(|l| view! { <option value=l.id>{l.title}</option> })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                </div>
                <div class="admin-form__row">
                    <TextField
                        label=Signal::derive(move || format!("{} ({})", tr("timeLimit"), tr("minutes")))
                        value=time_limit
                        on_input=set_time_limit
                        input_type="number"
                    />
                    <TextField label=label("passingScore") value=passing on_input=set_passing input_type="number"/>
                </div>
                <h2>{move || tr("questions")}</h2>
                {move || {
                    (0..question_count.get())
                        .map(|index| view! { <QuestionEditor form index/> })
                        .collect::<Vec<_>>()
                }}
                <button class="btn btn--secondary" type="button" on:click=move |_| form.update(QuizForm::add_question)>
                    {move || format!("+ {}", tr("addQuestion"))}
                </button>
                <div class="form-actions">
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { tr("saving") } else { tr("save") }}
                    </button>
                    <a class="btn btn--secondary" href="/admin/quizzes">{move || tr("cancel")}</a>
                </div>
            </form>
        </section>
    }
}

/// One question's text, options and correct-answer radio.
#[component]
fn QuestionEditor(form: RwSignal<QuizForm>, index: usize) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let tr = move |key: &'static str| ui.get().t(key);
    let draft = move || form.with(|f| f.questions.get(index).cloned().unwrap_or_default());
    let option_count = form.with_untracked(|f| f.questions.get(index).map_or(0, |q| q.options.len()));

    view! {
        <fieldset class="question-editor">
            <legend>{move || format!("{} {}", tr("question"), index + 1)}</legend>
            <TextField
                label=Signal::derive(move || tr("question"))
                value=Signal::derive(move || draft().text)
                on_input=Callback::new(move |v| form.update(|f| f.set_question_text(index, v)))
            />
            <div class="question-editor__options">
                {(0..option_count)
                    .map(|opt| {
                        view! {
                            <label class="question-editor__option">
                                <input
                                    type="radio"
                                    name=format!("correct-{index}")
                                    prop:checked=move || draft().correct == opt
                                    on:change=move |_| form.update(|f| f.set_correct(index, opt))
                                />
                                <span class="quiz-option__letter">{option_letter(opt).to_string()}</span>
                                <input
                                    class="field__input"
                                    type="text"
                                    prop:value=move || draft().options.get(opt).cloned().unwrap_or_default()
                                    on:input=move |ev| form.update(|f| f.set_option(index, opt, event_target_value(&ev)))
                                />
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <p class="muted">{move || tr("correctOption")}</p>
            <button
                class="btn btn--small btn--danger"
                type="button"
                on:click=move |_| form.update(|f| f.remove_question(index))
            >
                {move || tr("removeQuestion")}
            </button>
        </fieldset>
    }
}

