use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use portfolio_chat::{AssistantClient, Message, SessionController};

use crate::api::HttpAssistant;
use crate::storage::BrowserStore;

/// Signal projection of the session controller, provided via Leptos context.
/// Components read the signals; submit events are forwarded through
/// [`ChatState::send_message`]. The minimize toggle is pure presentation and
/// never touches the controller.
#[derive(Clone)]
pub struct ChatState {
    // --- Read signals (for components to subscribe to) ---
    pub messages: ReadSignal<Vec<Message>>,
    pub busy: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
    pub session_id: ReadSignal<Option<String>>,
    pub minimized: ReadSignal<bool>,

    // --- Write side ---
    set_messages: WriteSignal<Vec<Message>>,
    set_busy: WriteSignal<bool>,
    set_error: WriteSignal<Option<String>>,
    set_session_id: WriteSignal<Option<String>>,
    set_minimized: WriteSignal<bool>,

    controller: Rc<RefCell<SessionController<BrowserStore>>>,
}

impl ChatState {
    /// Builds the controller (restoring any persisted conversation) and
    /// provides the state in the current Leptos context.
    pub fn provide() -> Self {
        let controller = SessionController::new(BrowserStore::new());

        let (messages, set_messages) = signal(controller.conversation().messages.clone());
        let (busy, set_busy) = signal(false);
        let (error, set_error) = signal(None::<String>);
        let (session_id, set_session_id) = signal(controller.conversation().session_id.clone());
        let (minimized, set_minimized) = signal(false);

        let state = Self {
            messages,
            busy,
            error,
            session_id,
            minimized,
            set_messages,
            set_busy,
            set_error,
            set_session_id,
            set_minimized,
            controller: Rc::new(RefCell::new(controller)),
        };

        provide_context(state.clone());
        state
    }

    pub fn toggle_minimized(&self) {
        self.set_minimized.update(|minimized| *minimized = !*minimized);
    }

    /// Mirrors the controller's conversation and error notice into the
    /// render signals.
    fn sync(&self) {
        let controller = self.controller.borrow();
        self.set_messages.set(controller.conversation().messages.clone());
        self.set_session_id.set(controller.conversation().session_id.clone());
        self.set_error.set(controller.current_error().map(str::to_string));
    }

    /// Forwards a submit event into the controller and runs the network half
    /// of the turn. The optimistic user message is synced to the signals
    /// before the request is sent, so it renders while the call is in
    /// flight. At most one request is in flight: re-entry while busy is
    /// dropped, which is also what keeps the controller borrow exclusive.
    pub fn send_message(&self, text: String) {
        if self.busy.get_untracked() {
            return;
        }

        let request = match self.controller.borrow_mut().submit(&text) {
            Some(request) => request,
            None => return,
        };
        self.sync();
        self.set_busy.set(true);

        let state = self.clone();
        spawn_local(async move {
            let result = HttpAssistant
                .send(&request.message, request.session_id.as_deref())
                .await;
            {
                let mut controller = state.controller.borrow_mut();
                match result {
                    Ok(response) => controller.succeed(response),
                    Err(error) => controller.fail(error),
                }
            }
            state.sync();
            state.set_busy.set(false);
        });
    }
}
