//! Exam group picker on the landing page. Choosing a group lists the
//! subjects that group is examined on.

#[cfg(test)]
#[path = "group_selector_test.rs"]
mod group_selector_test;

use leptos::prelude::*;

use crate::state::ui::UiState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExamGroup {
    Graduation,
    Group1,
    Group2,
    Group3,
    Group4,
    Group5,
}

/// Subjects every group shares.
const CORE: [&str; 3] = ["math", "englishSubject", "azRus"];

impl ExamGroup {
    pub const ALL: [ExamGroup; 6] = [
        ExamGroup::Graduation,
        ExamGroup::Group1,
        ExamGroup::Group2,
        ExamGroup::Group3,
        ExamGroup::Group4,
        ExamGroup::Group5,
    ];

    /// i18n key of the group label.
    pub fn key(self) -> &'static str {
        match self {
            Self::Graduation => "graduation",
            Self::Group1 => "group1",
            Self::Group2 => "group2",
            Self::Group3 => "group3",
            Self::Group4 => "group4",
            Self::Group5 => "group5",
        }
    }

    /// i18n keys of the examined subjects, core subjects first.
    pub fn subjects(self) -> Vec<&'static str> {
        let extra: &[&str] = match self {
            Self::Graduation | Self::Group5 => &[],
            Self::Group1 => &["physics", "informaticsChemistry"],
            Self::Group2 => &["geography", "history"],
            Self::Group3 => &["history", "literature"],
            Self::Group4 => &["biology", "chemistry"],
        };
        CORE.iter().chain(extra).copied().collect()
    }
}

#[component]
pub fn GroupSelector() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let selected = RwSignal::new(None::<ExamGroup>);
    let tr = move |key: &'static str| ui.get().t(key);

    view! {
        <section class="group-selector">
            <h2 class="section-title">{move || tr("examGroupsTitle")}</h2>
            <div class="group-selector__buttons" role="group">
                {ExamGroup::ALL
                    .into_iter()
                    .map(|group| {
                        let active = move || selected.get() == Some(group);
                        view! {
                            <button
                                class="btn"
                                class:btn--secondary=move || !active()
                                aria-pressed=move || active().to_string()
                                on:click=move |_| selected.set(Some(group))
                            >
                                {move || tr(group.key())}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            {move || {
                selected
                    .get()
                    .map(|group| {
                        view! {
                            <div class="card-grid group-selector__subjects">
                                {group
                                    .subjects()
                                    .into_iter()
                                    .map(|subject| view! { <div class="card group-selector__subject">{tr(subject)}</div> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                    })
            }}
        </section>
    }
}
