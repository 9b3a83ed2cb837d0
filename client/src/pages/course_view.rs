//! Course view: lessons with per-lesson completion and the course's quizzes.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::navbar::Navbar;
use crate::net::types::{Course, Lesson, ProgressMap, Quiz};
use crate::net::{api_catalog, api_student};
use crate::state::auth::AuthState;
use crate::state::progress::{course_completion, sort_lessons};
use crate::state::ui::UiState;
use crate::util::auth::install_unauth_redirect;

#[derive(Clone, Debug, Default, PartialEq)]
struct CourseData {
    course: Option<Course>,
    lessons: Vec<Lesson>,
    progress: ProgressMap,
    quizzes: Vec<Quiz>,
}

#[component]
pub fn CourseViewPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    install_unauth_redirect(auth, use_navigate());

    let params = use_params_map();
    let data = RwSignal::new(CourseData::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(id) = params.with(|p| p.get("id")) else {
            return;
        };
        loading.set(true);
        leptos::task::spawn_local(async move {
            match api_catalog::course(&id).await {
                Ok(course) => {
                    let lessons = sort_lessons(api_catalog::course_lessons(&id).await.unwrap_or_default());
                    let progress = api_student::course_progress(&id).await.unwrap_or_default();
                    let quizzes = api_catalog::quizzes(Some(&id), None).await.unwrap_or_default();
                    data.set(CourseData { course: Some(course), lessons, progress, quizzes });
                    error.set(None);
                }
                Err(e) => error.set(Some(e.localized(ui.get_untracked().lang))),
            }
            loading.set(false);
        });
    });

    let completion = Memo::new(move |_| data.with(|d| course_completion(&d.lessons, &d.progress)));
    let tr = move |key: &'static str| ui.get().t(key);

    view! {
        <Navbar/>
        <main class="page course-view">
            <a class="back-link" href="/dashboard">{move || tr("dashboard")}</a>
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="page-status">{move || tr("loading")}</p> }
            >
                <Show
                    when=move || error.get().is_none() && data.with(|d| d.course.is_some())
                    fallback=move || {
                        view! {
                            <p class="alert alert--error">
                                {move || error.get().unwrap_or_else(|| tr("courseNotFound"))}
                            </p>
                        }
                    }
                >
                    <header class="course-view__header">
                        <h1 class="page__title">
                            {move || data.with(|d| d.course.as_ref().map(|c| c.title.clone()))}
                        </h1>
                        <p class="muted">
                            {move || data.with(|d| d.course.as_ref().map(|c| c.description.clone()))}
                        </p>
                        <div class="course-view__completion">
                            <span>{move || format!("{}: {}%", tr("progress"), completion.get())}</span>
                            <span class="progress-bar">
                                <span
                                    class="progress-bar__fill"
                                    style=move || format!("width: {}%", completion.get())
                                ></span>
                            </span>
                        </div>
                    </header>
                    <section class="course-view__lessons">
                        <h2>{move || tr("lessons")}</h2>
                        <ol class="lesson-list">
                            {move || {
                                let d = data.get();
                                d.lessons
                                    .into_iter()
                                    .map(|lesson| {
                                        let done = d.progress.get(&lesson.id).is_some_and(|p| p.completed);
                                        lesson_row(lesson, done)
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ol>
                    </section>
                    <Show when=move || data.with(|d| !d.quizzes.is_empty())>
                        <section class="course-view__quizzes">
                            <h2>{move || tr("quizzes")}</h2>
                            <ul>
                                {move || {
                                    data.get()
                                        .quizzes
                                        .into_iter()
                                        .map(|q| {
                                            let href = format!("/quiz/{}", urlencoding::encode(&q.id));
                                            view! { <li><a href=href>{q.title}</a></li> }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </ul>
                        </section>
                    </Show>
                </Show>
            </Show>
        </main>
    }
}

fn lesson_row(lesson: Lesson, done: bool) -> impl IntoView {
    let href = format!("/lesson/{}", urlencoding::encode(&lesson.id));
    view! {
        <li class="lesson-list__item" class:lesson-list__item--done=done>
            <a href=href>{lesson.title}</a>
            {done.then(|| view! { <span class="badge badge--success">"✓"</span> })}
        </li>
    }
}
