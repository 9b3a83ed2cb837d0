//! Package list. A 204 from the backend shows the empty state.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::package_card::PackageCard;
use crate::net::api_catalog;
use crate::net::types::Package;
use crate::state::ui::UiState;

#[component]
pub fn PackagesPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let packages = RwSignal::new(Vec::<Package>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match api_catalog::packages().await {
                Ok(list) => packages.set(list),
                Err(e) => error.set(Some(e.localized(ui.get_untracked().lang))),
            }
            loading.set(false);
        });
    });

    let tr = move |key: &'static str| ui.get().t(key);

    view! {
        <Navbar/>
        <main class="page">
            <h1 class="page__title">{move || tr("selectPackage")}</h1>
            <p class="muted">{move || tr("packageDescription")}</p>
            <Show when=move || error.get().is_some()>
                <p class="alert alert--error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="page-status">{move || tr("loadingPackages")}</p> }
            >
                <Show
                    when=move || !packages.get().is_empty() || error.get().is_some()
                    fallback=move || view! { <p class="page-status">{move || tr("noItems")}</p> }
                >
                    <div class="card-grid">
                        {move || {
                            packages
                                .get()
                                .into_iter()
                                .map(|package| view! { <PackageCard package/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </main>
        <Footer/>
    }
}
