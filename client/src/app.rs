//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::admin_layout::AdminLayout;
use crate::pages::admin::courses::{AdminCourseFormPage, AdminCoursesPage};
use crate::pages::admin::dashboard::AdminDashboardPage;
use crate::pages::admin::lessons::{AdminLessonFormPage, AdminLessonsPage};
use crate::pages::admin::packages::{AdminPackageFormPage, AdminPackagesPage};
use crate::pages::admin::quizzes::{AdminQuizFormPage, AdminQuizzesPage};
use crate::pages::{
    course_view::CourseViewPage, dashboard::DashboardPage, landing::LandingPage, lesson::LessonPage,
    login::LoginPage, not_found::NotFoundPage, packages::PackagesPage, payment::PaymentPage,
    profile::ProfilePage, quiz::QuizPage, register::RegisterPage, verify_email::VerifyEmailPage,
};
use crate::state::{auth::AuthState, ui::UiState};
use crate::util::lang_pref;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="az">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and UI contexts and sets up client-side routing.
/// Both contexts start in their server-safe defaults and are filled from
/// browser storage once hydrated.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(auth);
    provide_context(ui);

    Effect::new(move || {
        auth.set(AuthState::load());
        let lang = lang_pref::read_preference();
        ui.update(|u| u.lang = lang);
    });
    Effect::new(move || lang_pref::apply(ui.with(|u| u.lang)));

    view! {
        <Stylesheet id="leptos" href="/pkg/novademy.css"/>
        <Title text="Novademy"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("verify-email") view=VerifyEmailPage/>
                <Route path=StaticSegment("packages") view=PackagesPage/>
                <Route path=StaticSegment("payment") view=PaymentPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=(StaticSegment("course"), ParamSegment("id")) view=CourseViewPage/>
                <Route path=(StaticSegment("lesson"), ParamSegment("id")) view=LessonPage/>
                <Route path=(StaticSegment("quiz"), ParamSegment("id")) view=QuizPage/>
                <ParentRoute path=StaticSegment("admin") view=AdminLayout>
                    <Route path=StaticSegment("") view=AdminDashboardPage/>
                    <Route path=StaticSegment("dashboard") view=AdminDashboardPage/>
                    <Route path=StaticSegment("courses") view=AdminCoursesPage/>
                    <Route path=(StaticSegment("courses"), StaticSegment("new")) view=AdminCourseFormPage/>
                    <Route
                        path=(StaticSegment("courses"), ParamSegment("id"), StaticSegment("edit"))
                        view=AdminCourseFormPage
                    />
                    <Route path=StaticSegment("lessons") view=AdminLessonsPage/>
                    <Route path=(StaticSegment("lessons"), StaticSegment("new")) view=AdminLessonFormPage/>
                    <Route
                        path=(StaticSegment("lessons"), ParamSegment("id"), StaticSegment("edit"))
                        view=AdminLessonFormPage
                    />
                    <Route path=StaticSegment("quizzes") view=AdminQuizzesPage/>
                    <Route path=(StaticSegment("quizzes"), StaticSegment("new")) view=AdminQuizFormPage/>
                    <Route
                        path=(StaticSegment("quizzes"), ParamSegment("id"), StaticSegment("edit"))
                        view=AdminQuizFormPage
                    />
                    <Route path=StaticSegment("packages") view=AdminPackagesPage/>
                    <Route path=(StaticSegment("packages"), StaticSegment("new")) view=AdminPackageFormPage/>
                    <Route
                        path=(StaticSegment("packages"), ParamSegment("id"), StaticSegment("edit"))
                        view=AdminPackageFormPage
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
