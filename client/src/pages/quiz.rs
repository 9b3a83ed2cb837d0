//! Quiz player, `/quiz/:id`.
//!
//! SYSTEM CONTEXT
//! ==============
//! All scoring happens locally in [`QuizSession`]; the backend only supplies
//! the quiz with its correct answers. Results are not persisted.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::navbar::Navbar;
use crate::net::api_catalog;
use crate::state::auth::AuthState;
use crate::state::quiz::{QuizSession, option_letter};
use crate::state::ui::UiState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn QuizPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    install_unauth_redirect(auth, use_navigate());

    let params = use_params_map();
    let session = RwSignal::new(None::<QuizSession>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(id) = params.with(|p| p.get("id")) else {
            return;
        };
        loading.set(true);
        leptos::task::spawn_local(async move {
            match api_catalog::quiz(&id).await {
                Ok(quiz) => session.set(Some(QuizSession::new(quiz))),
                Err(e) => error.set(Some(e.localized(ui.get_untracked().lang))),
            }
            loading.set(false);
        });
    });

    let tr = move |key: &'static str| ui.get().t(key);
    let has = move |f: fn(&QuizSession) -> bool| session.with(|s| s.as_ref().is_some_and(f));
    let finished = move || has(|s| s.result().is_some());

    view! {
        <Navbar/>
        <main class="page quiz-page">
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="page-status">{move || tr("loading")}</p> }
            >
                <Show
                    when=move || session.with(Option::is_some)
                    fallback=move || {
                        view! {
                            <p class="alert alert--error">
                                {move || error.get().unwrap_or_else(|| tr("quizNotFound"))}
                            </p>
                        }
                    }
                >
                    <header class="quiz-page__header">
                        <h1 class="page__title">
                            {move || session.with(|s| s.as_ref().map(|s| s.quiz().title.clone()))}
                        </h1>
                        <p class="muted">
                            {move || {
                                session
                                    .with(|s| s.as_ref().and_then(|s| s.quiz().time_limit))
                                    .map(|m| format!("{}: {m}", tr("timeLimit")))
                            }}
                        </p>
                    </header>
                    <Show when=finished fallback=move || view! { <QuestionCard session/> }>
                        <ResultCard session/>
                    </Show>
                    <nav class="quiz-page__nav">
                        <Show when=move || !finished()>
                            <button
                                class="btn btn--secondary"
                                disabled=move || !has(QuizSession::can_go_prev)
                                on:click=move |_| session.update(|s| s.iter_mut().for_each(QuizSession::prev))
                            >
                                {move || tr("prevQuestion")}
                            </button>
                            <Show
                                when=move || has(QuizSession::is_last)
                                fallback=move || {
                                    view! {
                                        <button
                                            class="btn"
                                            disabled=move || !has(QuizSession::can_go_next)
                                            on:click=move |_| session.update(|s| s.iter_mut().for_each(QuizSession::next))
                                        >
                                            {move || tr("nextQuestion")}
                                        </button>
                                    }
                                }
                            >
                                <button
                                    class="btn"
                                    disabled=move || !has(QuizSession::all_answered)
                                    on:click=move |_| {
                                        session.update(|s| {
                                            if let Some(s) = s {
                                                s.submit();
                                            }
                                        });
                                    }
                                >
                                    {move || tr("finishQuiz")}
                                </button>
                            </Show>
                        </Show>
                    </nav>
                </Show>
            </Show>
        </main>
    }
}

#[component]
fn QuestionCard(session: RwSignal<Option<QuizSession>>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <section class="quiz-question">
            {move || {
                let (index, total, question, answer) = session.with(|s| {
                    let s = s.as_ref()?;
                    Some((s.current_index(), s.total(), s.current_question()?.clone(), s.current_answer()))
                })?;
                let label = format!("{} {} / {total}", ui.get().t("question"), index + 1);
                Some(view! {
                    <p class="quiz-question__counter">{label}</p>
                    <h2 class="quiz-question__text">{question.text}</h2>
                    <ul class="quiz-question__options">
                        {question
                            .options
                            .into_iter()
                            .enumerate()
                            .map(|(i, option)| {
                                let selected = answer == Some(i);
                                view! {
                                    <li>
                                        <button
                                            class="quiz-option"
                                            class:quiz-option--selected=selected
                                            on:click=move |_| {
                                                session.update(|s| {
                                                    if let Some(s) = s {
                                                        s.select(i);
                                                    }
                                                });
                                            }
                                        >
                                            <span class="quiz-option__letter">{option_letter(i).to_string()}</span>
                                            <span>{option}</span>
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                })
            }}
        </section>
    }
}

#[component]
fn ResultCard(session: RwSignal<Option<QuizSession>>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let tr = move |key: &'static str| ui.get().t(key);
    let result = move || session.with(|s| s.as_ref().and_then(QuizSession::result));
    let passing = move || session.with(|s| s.as_ref().map_or(0, |s| s.quiz().passing_score));
    let course_href = move || {
        session.with(|s| {
            s.as_ref()
                .map(|s| format!("/course/{}", urlencoding::encode(&s.quiz().course_id)))
                .unwrap_or_else(|| "/dashboard".to_owned())
        })
    };

    view! {
        <section class="quiz-result">
            <h2>{move || tr("quizResults")}</h2>
            {move || {
                result()
                    .map(|r| {
                        let verdict = if r.passed { tr("quizPassed") } else { tr("quizFailed") };
                        view! {
                            <p class="quiz-result__score" class:quiz-result__score--passed=r.passed>
                                {format!("{}%", r.display_score())}
                            </p>
                            <p>{format!("{}: {} / {}", tr("correctAnswers"), r.correct, r.total)}</p>
                            <p>{format!("{}: {}%", tr("passingScore"), passing())}</p>
                            <p class="quiz-result__verdict">{verdict}</p>
                        }
                    })
            }}
            <div class="quiz-result__actions">
                <button class="btn" on:click=move |_| session.update(|s| s.iter_mut().for_each(QuizSession::retry))>
                    {move || tr("retry")}
                </button>
                <a class="btn btn--secondary" href=course_href>{move || tr("backToCourse")}</a>
            </div>
        </section>
    }
}
