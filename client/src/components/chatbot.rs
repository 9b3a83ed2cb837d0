//! Floating lesson-assistant chat widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing page mounts it with the demo lesson id; the dashboard passes
//! the selected lesson. Each mount owns its own [`ChatState`], so history does
//! not leak between pages. Bot replies render as Markdown with raw HTML
//! stripped.
//!
//! ERROR HANDLING
//! ==============
//! Failures become bot messages. An expired session also clears the stored
//! tokens and moves to `/login` after a short pause so the message can be
//! read.

use leptos::prelude::*;

use crate::state::chat::{ChatError, ChatState, Sender, ask_assistant};
use crate::state::ui::UiState;
use crate::util::{dom, markdown, token};

const MESSAGES_END_ID: &str = "chatbot-end";
const EXPIRED_REDIRECT_MS: u32 = 2_000;

#[component]
pub fn Chatbot(#[prop(into)] lesson_id: Signal<String>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let chat = RwSignal::new(ChatState::default());
    let input = RwSignal::new(String::new());
    let redirect = RwSignal::new(None::<String>);
    dom::install_redirect(redirect);

    Effect::new(move || {
        let _ = chat.get().messages.len();
        dom::scroll_into_view(MESSAGES_END_ID);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(question) = chat.try_update(|c| c.begin_question(&input.get_untracked())).flatten() else {
            return;
        };
        input.set(String::new());
        let lesson = lesson_id.get_untracked();
        leptos::task::spawn_local(async move {
            let outcome = ask_assistant(&lesson, &question).await;
            let expired = matches!(outcome, Err(ChatError::SessionExpired));
            let lang = ui.get_untracked().lang;
            chat.update(|c| c.finish(outcome, lang));
            if expired {
                token::clear_tokens();
                dom::sleep_ms(EXPIRED_REDIRECT_MS).await;
                redirect.set(Some("/login".to_owned()));
            }
        });
    };

    let tr = move |key: &'static str| ui.get().t(key);

    view! {
        <div class="chatbot" class:chatbot--open=move || chat.get().open>
            <button
                class="chatbot__toggle"
                aria-label=move || if chat.get().open { tr("closeChat") } else { tr("openChat") }
                on:click=move |_| chat.update(ChatState::toggle_open)
            >
                {move || if chat.get().open { "×" } else { "💬" }}
            </button>
            <Show when=move || chat.get().open>
                <div class="chatbot__window">
                    <header class="chatbot__header">
                        <h3>{move || tr("chatTitle")}</h3>
                    </header>
                    <div class="chatbot__messages">
                        <Show when=move || chat.get().messages.is_empty()>
                            <p class="chatbot__welcome">{move || tr("chatWelcome")}</p>
                        </Show>
                        {move || {
                            chat.get()
                                .messages
                                .into_iter()
                                .map(|m| {
                                    let is_user = m.sender == Sender::User;
                                    let body = if is_user {
                                        view! { <div class="chatbot__text">{m.text}</div> }.into_any()
                                    } else {
                                        let html = markdown::render_html(&m.text);
                                        view! { <div class="chatbot__text chatbot__markdown" inner_html=html></div> }
                                            .into_any()
                                    };
                                    view! {
                                        <div
                                            class="chatbot__message"
                                            class:chatbot__message--user=is_user
                                            class:chatbot__message--bot=!is_user
                                            class:chatbot__message--error=m.is_error
                                        >
                                            {body}
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                        <Show when=move || chat.get().pending>
                            <div class="chatbot__message chatbot__message--bot chatbot__typing">
                                {move || tr("thinking")}
                            </div>
                        </Show>
                        <div id=MESSAGES_END_ID></div>
                    </div>
                    <form class="chatbot__form" on:submit=on_submit>
                        <input
                            class="chatbot__input"
                            type="text"
                            placeholder=move || tr("chatPlaceholder")
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            disabled=move || chat.get().pending
                        />
                        <button
                            class="btn btn--primary"
                            type="submit"
                            disabled=move || chat.get().pending || input.get().trim().is_empty()
                        >
                            {move || tr("send")}
                        </button>
                    </form>
                </div>
            </Show>
        </div>
    }
}
