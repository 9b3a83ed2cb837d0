//! Admin package list and package form.

use leptos::prelude::*;

use super::{DeletePrompt, ErrorBanner, ListHeader, confirm_and_delete, edit_href, use_edit_id};
use crate::components::text_field::{TextField, bind_field};
use crate::forms::admin::PackageForm;
use crate::net::api_catalog;
use crate::net::types::{Course, Package};
use crate::state::ui::UiState;
use crate::util::{dom, format};

#[component]
pub fn AdminPackagesPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let packages = RwSignal::new(Vec::<Package>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(None::<String>);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match api_catalog::packages().await {
                Ok(list) => packages.set(list),
                Err(e) => error.set(Some(e.localized(ui.get_untracked().lang))),
            }
            loading.set(false);
        });
    });

    let on_delete = confirm_and_delete(pending, packages, error, |p: &Package| p.id.as_str(), |id| async move {
        api_catalog::delete_package(&id).await
    });
    let tr = move |key: &'static str| ui.get().t(key);

    view! {
        <section class="admin-page">
            <ListHeader title_key="packages" new_href="/admin/packages/new"/>
            <ErrorBanner error/>
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="page-status">{move || tr("loading")}</p> }
            >
                <Show
                    when=move || !packages.with(Vec::is_empty)
                    fallback=move || view! { <p class="page-status">{move || tr("noItems")}</p> }
                >
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>{move || tr("title")}</th>
                                <th>{move || tr("price")}</th>
                                <th>{move || tr("courses")}</th>
                                <th>{move || tr("status")}</th>
                                <th>{move || tr("actions")}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                packages
                                    .get()
                                    .into_iter()
                                    .map(|package| {
                                        let id = package.id.clone();
                                        let href = edit_href("packages", &id);
                                        view! {
                                            <tr>
                                                <td>{package.title}</td>
                                                <td>{format::format_price(package.price)}</td>
                                                <td>{package.course_ids.len()}</td>
                                                <td>{package.status.unwrap_or_default()}</td>
                                                <td class="admin-table__actions">
                                                    <a class="btn btn--small" href=href>{move || tr("edit")}</a>
                                                    <button
                                                        class="btn btn--small btn--danger"
                                                        on:click=move |_| pending.set(Some(id.clone()))
                                                    >
                                                        {move || tr("delete")}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>
            <DeletePrompt pending on_delete/>
        </section>
    }
}

#[component]
pub fn AdminPackageFormPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let edit_id = use_edit_id();
    let form = RwSignal::new(PackageForm::default());
    let courses = RwSignal::new(Vec::<Course>::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let redirect = RwSignal::new(None::<String>);
    dom::install_redirect(redirect);

    Effect::new(move || {
        let id = edit_id.get();
        leptos::task::spawn_local(async move {
            courses.set(api_catalog::courses().await.unwrap_or_default());
            if let Some(id) = id {
                match api_catalog::package(&id).await {
                    Ok(package) => form.set(PackageForm::from(&package)),
                    Err(e) => error.set(Some(e.localized(ui.get_untracked().lang))),
                }
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let lang = ui.get_untracked().lang;
        let input = match form.with_untracked(PackageForm::to_input) {
            Ok(input) => input,
            Err(e) => {
                error.set(Some(e.localized(lang)));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        let id = edit_id.get_untracked();
        leptos::task::spawn_local(async move {
            let result = match id {
                Some(id) => api_catalog::update_package(&id, &input).await,
                None => api_catalog::create_package(&input).await,
            };
            busy.set(false);
            match result {
                Ok(()) => redirect.set(Some("/admin/packages".to_owned())),
                Err(e) => error.set(Some(e.localized(lang))),
            }
        });
    };

    let tr = move |key: &'static str| ui.get().t(key);
    let label = move |key: &'static str| Signal::derive(move || tr(key));
    let (title, set_title) = bind_field(form, |f| f.title.clone(), |f, v| f.title = v);
    let (description, set_description) = bind_field(form, |f| f.description.clone(), |f, v| f.description = v);
    let (price, set_price) = bind_field(form, |f| f.price.clone(), |f, v| f.price = v);
    let (discount, set_discount) = bind_field(form, |f| f.discount.clone(), |f, v| f.discount = v);
    let (duration, set_duration) = bind_field(form, |f| f.duration.clone(), |f, v| f.duration = v);

    view! {
        <section class="admin-page">
            <h1>{move || if edit_id.get().is_some() { tr("editPackage") } else { tr("newPackage") }}</h1>
            <ErrorBanner error/>
            <form class="admin-form" on:submit=on_submit>
                <TextField label=label("title") value=title on_input=set_title/>
                <TextField label=label("description") value=description on_input=set_description multiline=true/>
                <div class="admin-form__row">
                    <TextField label=label("price") value=price on_input=set_price input_type="number"/>
                    <TextField label=label("discount") value=discount on_input=set_discount input_type="number"/>
                    <TextField label=label("durationDays") value=duration on_input=set_duration input_type="number"/>
                </div>
                <label class="field">
                    <span class="field__label">{move || tr("status")}</span>
                    <select
                        class="field__input"
                        prop:value=move || form.with(|f| f.status.clone())
                        on:change=move |ev| form.update(|f| f.status = event_target_value(&ev))
                    >
                        <option value="active">"active"</option>
                        <option value="inactive">"inactive"</option>
                    </select>
                </label>
                <fieldset class="course-picker">
                    <legend>{move || tr("courses")}</legend>
                    {move || {
                        courses
                            .get()
                            .into_iter()
                            .map(|course| {
                                let id = course.id.clone();
                                let checked = {
                                    let id = id.clone();
                                    move || form.with(|f| f.has_course(&id))
                                };
                                view! {
                                    <label class="course-picker__item">
                                        <input
                                            type="checkbox"
                                            prop:checked=checked
                                            on:change=move |_| form.update(|f| f.toggle_course(&id))
                                        />
                                        <span>{course.title}</span>
                                    </label>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </fieldset>
                <div class="form-actions">
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { tr("saving") } else { tr("save") }}
                    </button>
                    <a class="btn btn--secondary" href="/admin/packages">{move || tr("cancel")}</a>
                </div>
            </form>
        </section>
    }
}
