use leptos::ev;
use leptos::prelude::*;

use portfolio_chat::{Message, MessageRole};

use crate::state::ChatState;

/// Shown on a fresh conversation only, to give visitors a starting point.
const SUGGESTED_QUESTIONS: &[&str] = &[
    "What's your background in AI?",
    "Tell me about your career transition",
    "What technologies do you work with?",
    "What makes you different from other developers?",
];

/// The embedded assistant widget: header with minimize toggle, message
/// history, error banner, and input. Minimizing is display-only; the
/// conversation state underneath is untouched.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let state = expect_context::<ChatState>();
    let minimized = state.minimized;
    let session_id = state.session_id;

    view! {
        <section id="ai-chat" class="chat-section">
            <div class="chat-panel">
                <div class="chat-header">
                    <div>
                        <h3>"AI Assistant"</h3>
                        <p class="chat-subtitle">
                            "Ask about my background, skills, and projects"
                        </p>
                    </div>
                    <button
                        class="minimize-btn"
                        on:click=move |_| state.toggle_minimized()
                    >
                        {move || if minimized.get() { "Expand" } else { "Minimize" }}
                    </button>
                </div>
                {move || (!minimized.get()).then(|| view! { <ChatBody /> })}
            </div>
            <p class="session-status">
                {move || match session_id.get() {
                    Some(id) => format!("Session: {}…", &id[..8.min(id.len())]),
                    None => "Starting new session".to_string(),
                }}
            </p>
        </section>
    }
}

/// Message history, error banner, suggestions, and the input row.
#[component]
fn ChatBody() -> impl IntoView {
    let state = expect_context::<ChatState>();
    let messages = state.messages;
    let busy = state.busy;
    let error = state.error;
    let draft = RwSignal::new(String::new());

    view! {
        <div class="messages-container">
            <For
                each=move || messages.get()
                key=|m| m.id
                let:message
            >
                <MessageBubble message=message />
            </For>

            // Typing indicator while a reply is outstanding
            {move || {
                busy.get().then(|| {
                    view! {
                        <div class="message assistant">
                            <div class="role-label">"assistant"</div>
                            <div class="typing-indicator">"…"</div>
                        </div>
                    }
                })
            }}
        </div>

        // Inline error notice, separate from the synthetic chat reply
        {move || {
            error.get().map(|err| {
                view! {
                    <div class="error-banner">{err}</div>
                }
            })
        }}

        {move || {
            (messages.get().len() == 1).then(|| view! { <SuggestedQuestions draft=draft /> })
        }}

        <ChatInput draft=draft />
    }
}

/// A single chat message bubble. Content is rendered as a text node only.
#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let css_class = if message.role == MessageRole::User {
        "message user"
    } else {
        "message assistant"
    };
    let time = message.created_at.format("%H:%M").to_string();

    view! {
        <div class=css_class>
            <div class="role-label">{message.role.to_string()}</div>
            <div class="bubble-text">{message.content.clone()}</div>
            <div class="timestamp">{time}</div>
        </div>
    }
}

#[component]
fn SuggestedQuestions(draft: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="suggestions">
            <p class="suggestions-label">"Try asking:"</p>
            <div class="suggestion-chips">
                {SUGGESTED_QUESTIONS
                    .iter()
                    .map(|question| {
                        let question = *question;
                        view! {
                            <button
                                class="chip"
                                on:click=move |_| draft.set(question.to_string())
                            >
                                {question}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Input row. The send path trims and drops empty drafts before they reach
/// the controller, and stays disabled while a reply is outstanding so at
/// most one request is in flight.
#[component]
fn ChatInput(draft: RwSignal<String>) -> impl IntoView {
    let state = expect_context::<ChatState>();
    let busy = state.busy;

    let send = {
        let state = state.clone();
        move || {
            let text = draft.get();
            if text.trim().is_empty() || busy.get() {
                return;
            }
            draft.set(String::new());
            state.send_message(text);
        }
    };

    let send_clone = send.clone();
    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send_clone();
        }
    };

    view! {
        <div class="input-area">
            <div class="input-row">
                <textarea
                    rows="1"
                    placeholder="Ask me anything about my background, skills, or projects…"
                    prop:value=draft
                    on:input=move |ev| {
                        draft.set(event_target_value(&ev));
                    }
                    on:keydown=on_keydown
                    disabled=busy
                />
                <button
                    class="send-btn"
                    on:click=move |_| send()
                    disabled=move || busy.get() || draft.get().trim().is_empty()
                >
                    {move || if busy.get() { "Sending…" } else { "Send" }}
                </button>
            </div>
        </div>
    }
}
