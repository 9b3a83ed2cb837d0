//! Dashboard sidebar: collapsible package → course → lesson tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure view over a [`CatalogTree`] and its [`TreeExpansion`]. Selecting a
//! lesson only updates the expansion state; the dashboard reacts to the
//! selected id.

use leptos::prelude::*;

use crate::net::types::Lesson;
use crate::state::catalog::{CatalogTree, CourseNode, PackageNode, TreeExpansion};

#[component]
pub fn SidebarTree(tree: Signal<CatalogTree>, expansion: RwSignal<TreeExpansion>) -> impl IntoView {
    view! {
        <aside class="sidebar-tree">
            {move || {
                tree.get()
                    .packages
                    .into_iter()
                    .map(|package| view! { <PackageBranch package expansion/> })
                    .collect::<Vec<_>>()
            }}
        </aside>
    }
}

#[component]
fn PackageBranch(package: PackageNode, expansion: RwSignal<TreeExpansion>) -> impl IntoView {
    let id = package.id.clone();
    let open = {
        let id = id.clone();
        move || expansion.get().is_package_open(&id)
    };

    view! {
        <div class="sidebar-tree__package">
            <button
                class="sidebar-tree__toggle sidebar-tree__toggle--package"
                class:sidebar-tree__toggle--open=open.clone()
                on:click=move |_| expansion.update(|e| e.toggle_package(&id))
            >
                {package.title}
            </button>
            <Show when=open>
                <div class="sidebar-tree__children">
                    {package
                        .courses
                        .clone()
                        .into_iter()
                        .map(|course| view! { <CourseBranch course expansion/> })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn CourseBranch(course: CourseNode, expansion: RwSignal<TreeExpansion>) -> impl IntoView {
    let id = course.course.id.clone();
    let open = {
        let id = id.clone();
        move || expansion.get().is_course_open(&id)
    };
    let course_href = format!("/course/{}", urlencoding::encode(&id));

    view! {
        <div class="sidebar-tree__course">
            <div class="sidebar-tree__course-header">
                <button
                    class="sidebar-tree__toggle sidebar-tree__toggle--course"
                    class:sidebar-tree__toggle--open=open.clone()
                    on:click=move |_| expansion.update(|e| e.toggle_course(&id))
                >
                    {course.course.title.clone()}
                </button>
                <a class="sidebar-tree__course-link" href=course_href title="↗">"↗"</a>
            </div>
            <Show when=open>
                <ul class="sidebar-tree__lessons">
                    {course
                        .lessons
                        .clone()
                        .into_iter()
                        .map(|lesson| view! { <LessonLeaf lesson expansion/> })
                        .collect::<Vec<_>>()}
                </ul>
            </Show>
        </div>
    }
}

#[component]
fn LessonLeaf(lesson: Lesson, expansion: RwSignal<TreeExpansion>) -> impl IntoView {
    let id = lesson.id.clone();
    let selected = {
        let id = id.clone();
        move || expansion.get().is_selected(&id)
    };

    view! {
        <li>
            <button
                class="sidebar-tree__lesson"
                class:sidebar-tree__lesson--selected=selected
                on:click=move |_| expansion.update(|e| e.select_lesson(&id))
            >
                {lesson.title}
            </button>
        </li>
    }
}
