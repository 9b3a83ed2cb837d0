//! Small DOM helpers for file inputs, focus, scrolling, timers and
//! deferred navigation.
//!
//! Every helper is a no-op (or yields nothing) outside the browser.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use leptos::html::Input;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::FileHandle;

/// First file picked in a file input, if any.
pub fn selected_file(input: NodeRef<Input>) -> Option<FileHandle> {
    #[cfg(feature = "hydrate")]
    {
        input.get_untracked()?.files()?.get(0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        None
    }
}

/// Focus the element with `id`.
pub fn focus_by_id(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            let _ = el.focus();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Smooth-scroll the element with `id` into view.
pub fn scroll_into_view(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            let opts = web_sys::ScrollIntoViewOptions::new();
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// `(current_time, duration)` of the media element that fired `ev`.
pub fn media_times(ev: &leptos::ev::Event) -> Option<(f64, f64)> {
    #[cfg(feature = "hydrate")]
    {
        let media = event_target::<web_sys::HtmlMediaElement>(ev);
        Some((media.current_time(), media.duration()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        None
    }
}

/// Move the media element that fired `ev` to `seconds`.
pub fn seek_media(ev: &leptos::ev::Event, seconds: f64) {
    #[cfg(feature = "hydrate")]
    {
        event_target::<web_sys::HtmlMediaElement>(ev).set_current_time(seconds);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ev, seconds);
    }
}

/// Wait `ms` milliseconds. Resolves immediately outside the browser.
pub async fn sleep_ms(ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
    }
}

/// Navigate whenever `target` is set, then clear it.
///
/// Async handlers and reactive children write a path into the signal instead
/// of holding the router's navigate function themselves.
pub fn install_redirect(target: RwSignal<Option<String>>) {
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = target.get() {
            target.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
}
