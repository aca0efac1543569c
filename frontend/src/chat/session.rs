//! Chat widget state machine.
//!
//! `ChatSession` owns everything the widget shows: the open flag, the
//! append-only transcript, the input draft and the one request that may be
//! in flight. The view layer sends events in and dispatches the
//! [`PendingRequest`] that `submit` hands back; it never mutates the
//! transcript itself.

use chrono::{DateTime, Utc};
use log::{debug, error};

use super::assistant::AssistantError;

pub const WELCOME_MESSAGE: &str =
    "Hi! I'm the Lumina Assistant. Ask me anything about our services or dental care.";
pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatState {
    Closed,
    OpenIdle,
    OpenPending,
    OpenError,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Pending,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

/// An accepted submission that still has to be sent to the assistant.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingRequest {
    pub id: RequestId,
    pub text: String,
}

#[derive(Debug)]
pub struct ChatSession {
    is_open: bool,
    transcript: Vec<ChatMessage>,
    phase: Phase,
    input_draft: String,
    in_flight: Option<RequestId>,
    next_request: u64,
    disposed: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::with_greeting(Some(WELCOME_MESSAGE))
    }

    pub fn with_greeting(greeting: Option<&str>) -> Self {
        Self {
            is_open: false,
            transcript: greeting
                .map(|text| ChatMessage::new(Role::Assistant, text))
                .into_iter()
                .collect(),
            phase: Phase::Idle,
            input_draft: String::new(),
            in_flight: None,
            next_request: 0,
            disposed: false,
        }
    }

    pub fn state(&self) -> ChatState {
        match (self.is_open, self.phase) {
            (false, _) => ChatState::Closed,
            (true, Phase::Idle) => ChatState::OpenIdle,
            (true, Phase::Pending) => ChatState::OpenPending,
            (true, Phase::Failed) => ChatState::OpenError,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_pending(&self) -> bool {
        self.phase == Phase::Pending
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn draft(&self) -> &str {
        &self.input_draft
    }

    /// Whether the send control should be enabled for the current draft.
    pub fn can_send(&self) -> bool {
        self.is_open && !self.is_pending() && !self.input_draft.trim().is_empty()
    }

    /// Opens or closes the window. Transcript, draft and any pending
    /// request survive a close.
    pub fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.input_draft = text.into();
    }

    /// Accepts `text` as the next user message when the window is open, no
    /// request is outstanding and the text is not blank. Anything else is a
    /// silent no-op.
    pub fn submit(&mut self, text: &str) -> Option<PendingRequest> {
        if self.disposed || !self.is_open || self.phase == Phase::Pending {
            return None;
        }
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = RequestId(self.next_request);
        self.next_request += 1;
        self.transcript.push(ChatMessage::new(Role::User, text));
        self.input_draft.clear();
        self.phase = Phase::Pending;
        self.in_flight = Some(id);
        debug!("Chat request {:?} accepted", id);

        Some(PendingRequest {
            id,
            text: text.to_string(),
        })
    }

    pub fn submit_draft(&mut self) -> Option<PendingRequest> {
        let draft = self.input_draft.clone();
        self.submit(&draft)
    }

    /// Applies the assistant's outcome for `id`. Returns `false` when the
    /// result was discarded because the session was disposed or the id is
    /// not the outstanding request.
    pub fn complete(&mut self, id: RequestId, outcome: Result<String, AssistantError>) -> bool {
        if self.disposed || self.in_flight != Some(id) {
            debug!("Discarding chat result for {:?}", id);
            return false;
        }
        self.in_flight = None;

        match outcome {
            Ok(reply) => {
                self.transcript.push(ChatMessage::new(Role::Assistant, reply));
                self.phase = Phase::Idle;
            }
            Err(e) => {
                error!("Assistant call failed: {}", e);
                self.transcript
                    .push(ChatMessage::new(Role::Assistant, FALLBACK_MESSAGE));
                self.phase = Phase::Failed;
            }
        }
        true
    }

    /// Marks the session as torn down. Results that arrive afterwards are
    /// dropped.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.in_flight = None;
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_session() -> ChatSession {
        let mut session = ChatSession::new();
        session.toggle_open();
        session
    }

    #[test]
    fn starts_closed_with_welcome_message() {
        let session = ChatSession::new();
        assert_eq!(session.state(), ChatState::Closed);
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].role, Role::Assistant);
        assert_eq!(session.transcript()[0].text, WELCOME_MESSAGE);
    }

    #[test]
    fn blank_submissions_are_ignored() {
        let mut session = open_session();
        assert_eq!(session.submit(""), None);
        assert_eq!(session.submit("   "), None);
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.state(), ChatState::OpenIdle);
    }

    #[test]
    fn submit_while_closed_is_ignored() {
        let mut session = ChatSession::new();
        assert_eq!(session.submit("hello"), None);
        assert_eq!(session.transcript().len(), 1);
    }

    #[test]
    fn successful_round_trip() {
        let mut session = open_session();
        session.set_draft("Do you accept insurance?");

        let request = session.submit_draft().unwrap();
        assert_eq!(request.text, "Do you accept insurance?");
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.state(), ChatState::OpenPending);
        assert_eq!(session.draft(), "");

        assert!(session.complete(request.id, Ok("Yes, most PPO plans.".to_string())));
        assert_eq!(session.transcript().len(), 3);
        assert_eq!(session.transcript()[2].role, Role::Assistant);
        assert_eq!(session.transcript()[2].text, "Yes, most PPO plans.");
        assert_eq!(session.state(), ChatState::OpenIdle);
    }

    #[test]
    fn failure_appends_fallback_and_enters_error_state() {
        let mut session = open_session();
        let request = session.submit("Do you accept insurance?").unwrap();

        assert!(session.complete(request.id, Err(AssistantError::Unconfigured)));
        let last = session.transcript().last().unwrap();
        assert_eq!(session.transcript().len(), 3);
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.text, FALLBACK_MESSAGE);
        assert_eq!(session.state(), ChatState::OpenError);

        // Resubmitting is how the user retries.
        assert!(session.submit("Hello again").is_some());
        assert_eq!(session.state(), ChatState::OpenPending);
    }

    #[test]
    fn failure_without_greeting_leaves_two_messages() {
        let mut session = ChatSession::with_greeting(None);
        session.toggle_open();
        let request = session.submit("Can I book for Saturday?").unwrap();
        session.complete(request.id, Err(AssistantError::Status(503)));

        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.transcript()[1].text, FALLBACK_MESSAGE);
        assert_eq!(session.state(), ChatState::OpenError);
    }

    #[test]
    fn only_one_request_in_flight() {
        let mut session = open_session();
        let first = session.submit("first").unwrap();
        assert_eq!(session.submit("second"), None);
        assert_eq!(session.transcript().len(), 2);
        assert!(!session.can_send());

        assert!(session.complete(first.id, Ok("ok".to_string())));
        let second = session.submit("second").unwrap();
        assert_ne!(first.id, second.id);
        assert!(!session.complete(first.id, Ok("stale".to_string())));
        assert_eq!(session.transcript().len(), 4);
    }

    #[test]
    fn closing_keeps_transcript_draft_and_pending_call() {
        let mut session = open_session();
        let request = session.submit("question").unwrap();
        session.set_draft("half typed");
        session.toggle_open();
        assert_eq!(session.state(), ChatState::Closed);

        assert!(session.complete(request.id, Ok("answer".to_string())));
        session.toggle_open();
        assert_eq!(session.state(), ChatState::OpenIdle);
        assert_eq!(session.transcript().len(), 3);
        assert_eq!(session.draft(), "half typed");
    }

    #[test]
    fn results_after_dispose_are_dropped() {
        let mut session = open_session();
        let request = session.submit("question").unwrap();
        session.dispose();
        assert!(!session.complete(request.id, Ok("late".to_string())));
        assert_eq!(session.transcript().len(), 2);
    }
}
