//! Admin overview: item counts per catalog section.

use leptos::prelude::*;

use crate::net::api_catalog;
use crate::state::ui::UiState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Counts {
    courses: usize,
    lessons: usize,
    quizzes: usize,
    packages: usize,
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let counts = RwSignal::new(None::<Counts>);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            // A failed section counts as empty; its own page shows the error.
            let courses = api_catalog::courses().await.map_or(0, |v| v.len());
            let lessons = api_catalog::lessons().await.map_or(0, |v| v.len());
            let quizzes = api_catalog::quizzes(None, None).await.map_or(0, |v| v.len());
            let packages = api_catalog::packages().await.map_or(0, |v| v.len());
            counts.set(Some(Counts { courses, lessons, quizzes, packages }));
        });
    });

    let tile = move |key: &'static str, href: &'static str, pick: fn(&Counts) -> usize| {
        view! {
            <a class="stat-tile" href=href>
                <span class="stat-tile__value">
                    {move || counts.get().map_or_else(|| "…".to_owned(), |c| pick(&c).to_string())}
                </span>
                <span class="stat-tile__label">{move || ui.get().t(key)}</span>
            </a>
        }
    };

    view! {
        <section class="admin-page">
            <h1>{move || ui.get().t("adminPanel")}</h1>
            <div class="stat-grid">
                {tile("courses", "/admin/courses", |c| c.courses)}
                {tile("lessons", "/admin/lessons", |c| c.lessons)}
                {tile("quizzes", "/admin/quizzes", |c| c.quizzes)}
                {tile("packages", "/admin/packages", |c| c.packages)}
            </div>
        </section>
    }
}
