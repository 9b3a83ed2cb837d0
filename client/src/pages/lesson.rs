//! Standalone lesson route, `/lesson/:id`.
//!
//! Loads the lesson, its siblings and the course progress map, then mounts a
//! [`LessonPlayer`]. Finishing the video moves to the next lesson's route, or
//! back to the course after the last one.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::lesson_player::LessonPlayer;
use crate::components::navbar::Navbar;
use crate::net::types::{Lesson, LessonProgress};
use crate::net::{api_catalog, api_student};
use crate::state::auth::AuthState;
use crate::state::progress::sort_lessons;
use crate::state::ui::UiState;
use crate::util::auth::install_unauth_redirect;
use crate::util::dom;

#[derive(Clone, Debug, PartialEq)]
struct Loaded {
    lesson: Lesson,
    siblings: Vec<Lesson>,
    saved: Option<LessonProgress>,
}

#[component]
pub fn LessonPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    install_unauth_redirect(auth, use_navigate());
    let redirect = RwSignal::new(None::<String>);
    dom::install_redirect(redirect);

    let params = use_params_map();
    let loaded = RwSignal::new(None::<Loaded>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(id) = params.with(|p| p.get("id")) else {
            return;
        };
        loaded.set(None);
        leptos::task::spawn_local(async move {
            match api_catalog::lesson(&id).await {
                Ok(lesson) => {
                    let siblings =
                        sort_lessons(api_catalog::course_lessons(&lesson.course_id).await.unwrap_or_default());
                    let saved = api_student::course_progress(&lesson.course_id)
                        .await
                        .ok()
                        .and_then(|mut map| map.remove(&lesson.id));
                    loaded.set(Some(Loaded { lesson, siblings, saved }));
                    error.set(None);
                }
                Err(e) => error.set(Some(e.localized(ui.get_untracked().lang))),
            }
        });
    });

    let on_next = Callback::new(move |next: Option<String>| {
        let target = match next {
            Some(id) => format!("/lesson/{}", urlencoding::encode(&id)),
            None => match loaded.with_untracked(|l| l.as_ref().map(|l| l.lesson.course_id.clone())) {
                Some(course_id) => format!("/course/{}", urlencoding::encode(&course_id)),
                None => "/dashboard".to_owned(),
            },
        };
        redirect.set(Some(target));
    });

    let tr = move |key: &'static str| ui.get().t(key);
    let back_href = move || {
        loaded.with(|l| {
            l.as_ref().map_or_else(
                || "/dashboard".to_owned(),
                |l| format!("/course/{}", urlencoding::encode(&l.lesson.course_id)),
            )
        })
    };

    view! {
        <Navbar/>
        <main class="page lesson-page">
            <a class="back-link" href=back_href>{move || tr("backToCourse")}</a>
            <Show when=move || error.get().is_some()>
                <p class="alert alert--error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || {
                loaded
                    .get()
                    .map(|Loaded { lesson, siblings, saved }| {
                        view! { <LessonPlayer lesson siblings saved on_next/> }
                    })
            }}
        </main>
    }
}
