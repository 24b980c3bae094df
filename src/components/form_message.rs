use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

/// How long a status message stays under the form.
pub const MESSAGE_LIFETIME_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn css_class(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, kind: MessageKind) -> Self {
        Self { text: text.into(), kind }
    }
}

/// Decides which scheduled clear is allowed to remove the visible message.
#[derive(Debug, Default)]
pub struct StatusBoard {
    latest_ticket: u64,
    pending: bool,
}

impl StatusBoard {
    /// Records a newly shown message and hands out the ticket for its clear.
    pub fn show(&mut self) -> u64 {
        self.latest_ticket += 1;
        self.pending = true;
        self.latest_ticket
    }

    /// True if `ticket` came from the most recent `show` and nothing has
    /// cleared that message yet.
    pub fn expire(&mut self, ticket: u64) -> bool {
        if ticket != self.latest_ticket || !self.pending {
            return false;
        }
        self.pending = false;
        true
    }
}

pub fn message_classes(message: Option<&StatusMessage>) -> Classes {
    classes!("form-message", message.map(|m| m.kind.css_class()))
}

#[derive(Default)]
struct PresenterState {
    board: StatusBoard,
    pending_clear: Option<Timeout>,
}

#[derive(Clone)]
pub struct MessagePresenter {
    visible: UseStateHandle<Option<StatusMessage>>,
    state: Rc<RefCell<PresenterState>>,
}

impl MessagePresenter {
    pub fn current(&self) -> Option<&StatusMessage> {
        (*self.visible).as_ref()
    }

    pub fn show(&self, text: impl Into<String>, kind: MessageKind) {
        let ticket = self.state.borrow_mut().board.show();
        self.visible.set(Some(StatusMessage::new(text, kind)));

        let visible = self.visible.clone();
        let state = Rc::clone(&self.state);
        let clear = Timeout::new(MESSAGE_LIFETIME_MS, move || {
            if state.borrow_mut().board.expire(ticket) {
                debug!("Clearing form message {}", ticket);
                visible.set(None);
            }
        });

        // Replacing the handle drops, and so cancels, the previous clear.
        self.state.borrow_mut().pending_clear = Some(clear);
    }
}

#[hook]
pub fn use_transient_message() -> MessagePresenter {
    let visible = use_state(|| None::<StatusMessage>);
    let state = use_mut_ref(PresenterState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    state.borrow_mut().pending_clear.take();
                }
            },
            (),
        );
    }

    MessagePresenter { visible, state }
}

#[derive(Properties, PartialEq)]
pub struct FormMessageProps {
    pub message: Option<StatusMessage>,
}

#[function_component(FormMessage)]
pub fn form_message(props: &FormMessageProps) -> Html {
    let text = props.message.as_ref().map(|m| m.text.clone()).unwrap_or_default();

    html! {
        <div id="formMessage" class={message_classes(props.message.as_ref())}>
            {text}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_live_five_seconds() {
        assert_eq!(MESSAGE_LIFETIME_MS, 5_000);
    }

    #[test]
    fn message_clears_when_its_timer_fires() {
        let mut board = StatusBoard::default();
        let ticket = board.show();

        assert!(board.expire(ticket));
    }

    #[test]
    fn superseded_timer_leaves_newer_message_visible() {
        let mut board = StatusBoard::default();
        let first = board.show();
        let second = board.show();

        assert!(!board.expire(first));
        assert!(board.expire(second));
    }

    #[test]
    fn expiring_twice_is_a_no_op() {
        let mut board = StatusBoard::default();
        let ticket = board.show();

        assert!(board.expire(ticket));
        assert!(!board.expire(ticket));
    }

    #[test]
    fn nothing_to_expire_before_the_first_message() {
        let mut board = StatusBoard::default();
        assert!(!board.expire(0));
    }

    #[test]
    fn classes_follow_message_kind() {
        let success = StatusMessage::new("ok", MessageKind::Success);
        let error = StatusMessage::new("no", MessageKind::Error);

        assert_eq!(message_classes(Some(&success)).to_string(), "form-message success");
        assert_eq!(message_classes(Some(&error)).to_string(), "form-message error");
        assert_eq!(message_classes(None).to_string(), "form-message");
    }
}
