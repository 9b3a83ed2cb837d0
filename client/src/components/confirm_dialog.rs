//! Delete confirmation modal used by the admin lists.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Modal asking to confirm a destructive action. Clicking the backdrop cancels.
#[component]
pub fn ConfirmDialog(on_confirm: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let tr = move |key: &'static str| ui.get().t(key);

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || tr("confirmDelete")}</h2>
                <p class="dialog__danger">{move || tr("confirmDeleteText")}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        {move || tr("cancel")}
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        {move || tr("delete")}
                    </button>
                </div>
            </div>
        </div>
    }
}
