//! Labelled text input bound to a signal, with an optional inline error.

use leptos::prelude::*;

/// Getter/setter pair for one string field of a form held in a signal.
pub fn bind_field<T: Send + Sync + 'static>(
    form: RwSignal<T>,
    get: fn(&T) -> String,
    set: fn(&mut T, String),
) -> (Signal<String>, Callback<String>) {
    (
        Signal::derive(move || form.with(get)),
        Callback::new(move |value| form.update(|f| set(f, value))),
    )
}

#[component]
pub fn TextField(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional, into)] error: MaybeProp<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// Render a textarea instead of an input.
    #[prop(optional)]
    multiline: bool,
) -> impl IntoView {
    let control = if multiline {
        view! {
            <textarea
                class="field__input field__input--multiline"
                rows="5"
                placeholder=move || placeholder.get()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                class="field__input"
                type=input_type.unwrap_or("text")
                placeholder=move || placeholder.get()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <label class="field" class:field--invalid=move || error.get().is_some()>
            <span class="field__label">{move || label.get()}</span>
            {control}
            <Show when=move || error.get().is_some()>
                <span class="field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}
