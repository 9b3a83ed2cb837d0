//! Video lesson player with watch-progress sync.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the dashboard (inline) and the `/lesson/:id` page. Every
//! `timeupdate` goes through a [`ProgressTracker`]; the actions it returns
//! become `POST /lesson/{id}/watch` calls, one at a time. When the video ends
//! the parent is told which lesson comes next, or `None` at the end of the
//! course.
//!
//! TRADE-OFFS
//! ==========
//! Playback resumes from the last saved position on load. Saves from another
//! tab are not observed; the backend keeps whichever write lands last.

use leptos::prelude::*;

use crate::components::comment_section::CommentSection;
use crate::net::types::{Lesson, LessonProgress, Quiz};
use crate::net::{api_catalog, api_student};
use crate::state::progress::{ProgressAction, ProgressTracker, next_lesson};
use crate::state::ui::UiState;
use crate::util::{dom, format, markdown};

#[component]
pub fn LessonPlayer(
    lesson: Lesson,
    /// The course's lessons in play order.
    siblings: Vec<Lesson>,
    saved: Option<LessonProgress>,
    /// Called with the next lesson id, or `None` after the last lesson.
    on_next: Callback<Option<String>>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let tracker = RwSignal::new(ProgressTracker::resume(saved.as_ref()));
    let position = RwSignal::new(0.0_f64);
    let quizzes = RwSignal::new(Vec::<Quiz>::new());
    let lesson_id = lesson.id.clone();

    {
        let course_id = lesson.course_id.clone();
        let lesson_id = lesson_id.clone();
        Effect::new(move || {
            let (course_id, lesson_id) = (course_id.clone(), lesson_id.clone());
            leptos::task::spawn_local(async move {
                if let Ok(list) = api_catalog::quizzes(Some(&course_id), Some(&lesson_id)).await {
                    quizzes.set(list);
                }
            });
        });
    }

    let run_action = {
        let lesson_id = lesson_id.clone();
        move |action: ProgressAction| {
            if tracker.try_update(|t| t.begin_request(action)) != Some(true) {
                return;
            }
            let input = tracker.with_untracked(|t| t.watch_input(action));
            let lesson_id = lesson_id.clone();
            leptos::task::spawn_local(async move {
                let ok = api_student::save_watch(&lesson_id, input).await.is_ok();
                tracker.update(|t| t.finish_request(ok));
            });
        }
    };

    let on_time_update = {
        let run_action = run_action.clone();
        move |ev: leptos::ev::Event| {
            let Some((current, duration)) = dom::media_times(&ev) else {
                return;
            };
            position.set(current);
            let actions = tracker.try_update(|t| t.on_time_update(current, duration)).unwrap_or_default();
            for action in actions {
                run_action(action);
            }
        }
    };

    let on_loaded = move |ev: leptos::ev::Event| {
        let resume_at = tracker.with_untracked(|t| (!t.is_completed()).then(|| t.last_saved()));
        if let Some(seconds) = resume_at.filter(|s| *s > 0.0) {
            dom::seek_media(&ev, seconds);
        }
    };

    let on_ended = {
        let lesson_id = lesson_id.clone();
        move |_| {
            let next = next_lesson(&siblings, &lesson_id).map(|l| l.id.clone());
            on_next.run(next);
        }
    };

    let on_mark = move |_| {
        if let Some(action) = tracker.with_untracked(|t| t.request_completion(position.get_untracked())) {
            run_action(action);
        }
    };

    let tr = move |key: &'static str| ui.get().t(key);
    let content_html = lesson.content.as_deref().map(markdown::render_html);
    let transcript = lesson.transcript.clone().filter(|t| !t.trim().is_empty());

    view! {
        <article class="lesson-player">
            <h2 class="lesson-player__title">{lesson.title.clone()}</h2>
            {match lesson.video_url.clone() {
                Some(src) if !src.is_empty() => {
                    view! {
                        <video
                            class="lesson-player__video"
                            src=src
                            controls=true
                            preload="metadata"
                            on:loadedmetadata=on_loaded
                            on:timeupdate=on_time_update
                            on:ended=on_ended
                        ></video>
                    }
                        .into_any()
                }
                _ => view! { <p class="lesson-player__missing">{move || tr("videoUnavailable")}</p> }.into_any(),
            }}
            <div class="lesson-player__status">
                <span class="lesson-player__clock">{move || format::format_clock(position.get())}</span>
                <span class="progress-bar">
                    <span
                        class="progress-bar__fill"
                        style=move || format!("width: {}%", tracker.get().percent())
                    ></span>
                </span>
                <Show
                    when=move || tracker.get().is_completed()
                    fallback=move || {
                        view! {
                            <button
                                class="btn btn--small"
                                disabled=move || tracker.get().is_in_flight()
                                on:click=on_mark.clone()
                            >
                                {move || tr("markAsWatched")}
                            </button>
                        }
                    }
                >
                    <span class="badge badge--success">{move || tr("completed")}</span>
                </Show>
            </div>
            <section class="lesson-player__about">
                <h3>{move || tr("aboutLesson")}</h3>
                <p>{lesson.description.clone()}</p>
                {content_html.map(|html| view! { <div class="markdown" inner_html=html></div> })}
            </section>
            {transcript
                .map(|text| {
                    view! {
                        <details class="lesson-player__transcript">
                            <summary>{move || tr("transcript")}</summary>
                            <p>{text}</p>
                        </details>
                    }
                })}
            <Show when=move || !quizzes.get().is_empty()>
                <section class="lesson-player__quizzes">
                    <h3>{move || tr("quizzes")}</h3>
                    <ul>
                        {move || {
                            quizzes
                                .get()
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
            <CommentSection lesson_id=lesson_id/>
        </article>
    }
}
