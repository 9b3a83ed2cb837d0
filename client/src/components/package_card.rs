//! Package card with a buy action, used on the landing pricing section and
//! the package list.

#[cfg(test)]
#[path = "package_card_test.rs"]
mod package_card_test;

use leptos::prelude::*;

use crate::net::types::Package;
use crate::state::ui::UiState;
use crate::util::format::format_price;

/// Payment page link carrying the package id, name and amount.
pub fn payment_href(package: &Package) -> String {
    format!(
        "/payment?packageId={}&packageName={}&amount={}",
        urlencoding::encode(&package.id),
        urlencoding::encode(&package.title),
        package.price
    )
}

#[component]
pub fn PackageCard(package: Package) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let href = payment_href(&package);
    let price = format_price(package.price);

    view! {
        <article class="package-card">
            {package.image_url.map(|src| view! { <img class="package-card__image" src=src alt=""/> })}
            <h3 class="package-card__title">{package.title}</h3>
            <p class="package-card__description">{package.description}</p>
            <p class="package-card__price">{price}</p>
            <a class="btn btn--primary package-card__buy" href=href>
                {move || ui.get().t("buyNow")}
            </a>
        </article>
    }
}
