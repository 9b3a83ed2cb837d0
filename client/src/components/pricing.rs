//! Landing pricing section listing the public packages.

use leptos::prelude::*;

use crate::components::package_card::PackageCard;
use crate::net::api_catalog;
use crate::net::types::Package;
use crate::state::ui::UiState;

#[component]
pub fn Pricing() -> impl IntoView {
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

    view! {
        <section class="pricing" id="pricing">
            <h2 class="section-title">{move || ui.get().t("pricingTitle")}</h2>
            <Show when=move || error.get().is_some()>
                <p class="alert alert--error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="muted">{move || ui.get().t("loadingPackages")}</p> }
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
        </section>
    }
}
