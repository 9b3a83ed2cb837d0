//! Course summary card linking to the course view.

use leptos::prelude::*;

use crate::net::types::Course;

#[component]
pub fn CourseCard(
    course: Course,
    /// Completion percent, when progress is known.
    #[prop(optional)]
    completion: Option<u8>,
) -> impl IntoView {
    let href = format!("/course/{}", urlencoding::encode(&course.id));

    view! {
        <a class="course-card" href=href>
            {course.image_url.map(|src| view! { <img class="course-card__image" src=src alt=""/> })}
            <span class="course-card__subject">{course.subject.as_str()}</span>
            <h3 class="course-card__title">{course.title}</h3>
            <p class="course-card__description">{course.description}</p>
            {completion
                .map(|pct| {
                    view! {
                        <span class="progress-bar" title=format!("{pct}%")>
                            <span class="progress-bar__fill" style=format!("width: {pct}%")></span>
                        </span>
                    }
                })}
        </a>
    }
}
