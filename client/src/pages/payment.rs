//! Simulated checkout.
//!
//! DESIGN
//! ======
//! No payment provider is wired in. The page validates the query string it was
//! opened with, pretends to process for a moment, and then offers the way to
//! the dashboard. Nothing is sent to the backend.

#[cfg(test)]
#[path = "payment_test.rs"]
mod payment_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::navbar::Navbar;
use crate::state::ui::UiState;
use crate::util::dom;
use crate::util::format::format_price;

/// Simulated processing time.
pub const PROCESSING_MS: u32 = 1_500;

#[derive(Clone, Debug, PartialEq)]
pub struct PaymentDetails {
    pub package_id: String,
    pub package_name: String,
    pub amount: f64,
}

impl PaymentDetails {
    /// Read the checkout parameters.
    ///
    /// # Errors
    ///
    /// Returns `paymentDetailsMissing` when any parameter is absent or blank,
    /// and `paymentDetailsInvalid` when the amount is not a positive number.
    pub fn from_params(
        package_id: Option<&str>,
        package_name: Option<&str>,
        amount: Option<&str>,
    ) -> Result<Self, &'static str> {
        let present = |v: Option<&str>| v.map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned);
        let (Some(package_id), Some(package_name), Some(amount)) =
            (present(package_id), present(package_name), present(amount))
        else {
            return Err("paymentDetailsMissing");
        };
        let amount: f64 = amount.parse().map_err(|_| "paymentDetailsInvalid")?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err("paymentDetailsInvalid");
        }
        Ok(Self { package_id, package_name, amount })
    }
}

#[component]
pub fn PaymentPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let query = use_query_map();
    let details = Memo::new(move |_| {
        query.with(|q| {
            PaymentDetails::from_params(
                q.get_str("packageId"),
                q.get_str("packageName"),
                q.get_str("amount"),
            )
        })
    });
    let processing = RwSignal::new(false);
    let paid = RwSignal::new(false);

    let on_pay = move |_| {
        if processing.get() || details.get().is_err() {
            return;
        }
        processing.set(true);
        leptos::task::spawn_local(async move {
            dom::sleep_ms(PROCESSING_MS).await;
            processing.set(false);
            paid.set(true);
        });
    };

    let tr = move |key: &'static str| ui.get().t(key);

    view! {
        <Navbar/>
        <main class="page page--narrow">
            <h1 class="page__title">{move || tr("paymentTitle")}</h1>
            {move || match details.get() {
                Err(key) => {
                    view! {
                        <div class="alert alert--error">
                            <p>{move || tr(key)}</p>
                            <a class="btn btn--primary" href="/packages">{move || tr("packages")}</a>
                        </div>
                    }
                        .into_any()
                }
                Ok(d) => {
                    view! {
                        <div class="payment-card">
                            <dl class="payment-card__details">
                                <dt>{move || tr("packageName")}</dt>
                                <dd>{d.package_name.clone()}</dd>
                                <dt>{move || tr("amount")}</dt>
                                <dd>{format_price(d.amount)}</dd>
                            </dl>
                            <p class="muted">{move || tr("paymentDemoNote")}</p>
                            <button
                                class="btn btn--primary btn--large"
                                disabled=move || processing.get()
                                on:click=on_pay
                            >
                                {move || if processing.get() { tr("processing") } else { tr("payNow") }}
                            </button>
                        </div>
                    }
                        .into_any()
                }
            }}
            <Show when=move || paid.get()>
                <div class="dialog-backdrop">
                    <div class="dialog">
                        <h2>{move || tr("paymentSuccess")}</h2>
                        <div class="dialog__actions">
                            <a class="btn btn--primary" href="/dashboard">{move || tr("goToDashboard")}</a>
                        </div>
                    </div>
                </div>
            </Show>
        </main>
    }
}
