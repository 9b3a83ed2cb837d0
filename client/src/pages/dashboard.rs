//! Student dashboard: subscribed catalog tree plus the selected lesson.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Once the session is known it
//! loads the package → course → lesson tree for the user's active
//! subscriptions, then plays whichever lesson the sidebar selects. Course
//! progress is fetched on every lesson selection, before the player mounts,
//! so playback resumes from what the backend last stored.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::chatbot::Chatbot;
use crate::components::course_card::CourseCard;
use crate::components::lesson_player::LessonPlayer;
use crate::components::navbar::Navbar;
use crate::components::sidebar_tree::SidebarTree;
use crate::net::api_student;
use crate::net::types::{Course, Lesson};
use crate::state::auth::AuthState;
use crate::state::catalog::{CatalogTree, DashboardError, TreeExpansion, load_tree};
use crate::state::chat::DEMO_LESSON_ID;
use crate::state::progress::{SelectionProgress, needs_progress_fetch};
use crate::state::ui::UiState;
use crate::util::auth::install_unauth_redirect;
use crate::util::dom;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    install_unauth_redirect(auth, use_navigate());
    let redirect = RwSignal::new(None::<String>);
    dom::install_redirect(redirect);

    let tree = RwSignal::new(CatalogTree::default());
    let error = RwSignal::new(None::<DashboardError>);
    let loading = RwSignal::new(true);
    let expansion = RwSignal::new(TreeExpansion::default());
    let progress = RwSignal::new(None::<SelectionProgress>);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        let Some(user_id) = auth.with(|a| a.user_id().map(str::to_owned)) else {
            return;
        };
        if requested.get_untracked() {
            return;
        }
        requested.set(true);
        leptos::task::spawn_local(async move {
            match load_tree(&user_id).await {
                Ok(loaded) => tree.set(loaded),
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    });

    let selected = Memo::new(move |_| {
        let id = expansion.with(|e| e.lesson.clone())?;
        tree.with(|t| t.find_lesson(&id).cloned())
    });
    let selected_course = Memo::new(move |_| selected.with(|l| l.as_ref().map(|l| l.course_id.clone())));

    Effect::new(move || {
        let Some(lesson) = selected.get() else {
            return;
        };
        if !progress.with_untracked(|p| needs_progress_fetch(p.as_ref(), Some(&lesson.id))) {
            return;
        }
        leptos::task::spawn_local(async move {
            let map = api_student::course_progress(&lesson.course_id).await.unwrap_or_default();
            // A slower response for an earlier selection must not win.
            if expansion.with_untracked(|e| e.lesson.as_deref() == Some(lesson.id.as_str())) {
                progress.set(Some(SelectionProgress::new(lesson.id, map)));
            }
        });
    });

    let on_next = Callback::new(move |next: Option<String>| match next {
        Some(id) => expansion.update(|e| e.select_lesson(&id)),
        None => {
            if let Some(course_id) = selected_course.get_untracked() {
                redirect.set(Some(format!("/course/{}", urlencoding::encode(&course_id))));
            }
        }
    });

    let chat_lesson = Signal::derive(move || {
        expansion.with(|e| e.lesson.clone()).unwrap_or_else(|| DEMO_LESSON_ID.to_owned())
    });
    let tr = move |key: &'static str| ui.get().t(key);

    view! {
        <Navbar/>
        <main class="dashboard">
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="page-status">{move || tr("loadingCourses")}</p> }
            >
                <Show
                    when=move || error.get().is_none()
                    fallback=move || {
                        let err = error.get().unwrap_or(DashboardError::FailedToLoadCourses);
                        view! {
                            <div class="dashboard__error">
                                <p class="alert alert--error">{move || tr(err.key())}</p>
                                <Show when=move || err.suggests_packages()>
                                    <a class="btn" href="/packages">{move || tr("viewAvailablePackages")}</a>
                                </Show>
                            </div>
                        }
                    }
                >
                    <div class="dashboard__layout">
                        <SidebarTree tree=tree.into() expansion/>
                        <section class="dashboard__content">
                            {move || match selected.get() {
                                Some(lesson) => player_view(lesson, tree, progress, on_next).into_any(),
                                None => overview(tree, tr).into_any(),
                            }}
                        </section>
                    </div>
                </Show>
            </Show>
        </main>
        <Chatbot lesson_id=chat_lesson/>
    }
}

fn player_view(
    lesson: Lesson,
    tree: RwSignal<CatalogTree>,
    progress: RwSignal<Option<SelectionProgress>>,
    on_next: Callback<Option<String>>,
) -> impl IntoView {
    let lesson_id = lesson.id.clone();
    let ready = {
        let lesson_id = lesson_id.clone();
        move || progress.with(|p| p.as_ref().is_some_and(|p| p.is_for(&lesson_id)))
    };

    view! {
        <Show when=ready fallback=|| view! { <div class="spinner"></div> }>
            {
                let lesson = lesson.clone();
                let siblings = tree
                    .with_untracked(|t| t.course_of(&lesson_id).map(|c| c.lessons.clone()))
                    .unwrap_or_default();
                let saved = progress.with_untracked(|p| p.as_ref().and_then(SelectionProgress::saved));
                view! { <LessonPlayer lesson siblings saved on_next/> }
            }
        </Show>
    }
}

/// Courses across all packages, first occurrence wins.
fn unique_courses(tree: &CatalogTree) -> Vec<Course> {
    let mut seen = HashSet::new();
    tree.packages
        .iter()
        .flat_map(|p| &p.courses)
        .filter(|node| seen.insert(node.course.id.clone()))
        .map(|node| node.course.clone())
        .collect()
}

fn overview(
    tree: RwSignal<CatalogTree>,
    tr: impl Fn(&'static str) -> String + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="dashboard__overview">
            <h1 class="page__title">{move || tr("selectLesson")}</h1>
            <p class="muted">{move || tr("selectLessonDescription")}</p>
            <div class="card-grid">
                {unique_courses(&tree.get_untracked())
                    .into_iter()
                    .map(|course| view! { <CourseCard course/> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
