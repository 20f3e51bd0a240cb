//! Question-list state for the moderation dashboard.
//!
//! DESIGN
//! ======
//! The view owns exactly one snapshot of the live query at a time. Every
//! push replaces `items` wholesale; nothing mutates the list in place, so
//! renders never observe partial state.

#[cfg(test)]
#[path = "questions_test.rs"]
mod questions_test;

use records::{Question, QuestionStatus};

/// Store subscription lifecycle state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Not connected; socket is closed or not yet opened.
    #[default]
    Disconnected,
    /// WebSocket handshake is in progress.
    Connecting,
    /// WebSocket is open and the live query is subscribed.
    Connected,
}

/// Dashboard state: the latest snapshot and the subscription lifecycle.
#[derive(Clone, Debug, Default)]
pub struct QuestionsState {
    /// Most recent full result set pushed by the live query, in the
    /// store's `timestamp` order.
    pub items: Vec<Question>,
    /// Current store connection lifecycle state.
    pub connection_status: ConnectionStatus,
}

impl QuestionsState {
    /// Replace the whole list with a freshly pushed snapshot.
    pub fn replace_snapshot(&mut self, items: Vec<Question>) {
        self.items = items;
    }

    /// Questions awaiting moderation, in source order.
    #[must_use]
    pub fn pending(&self) -> Vec<Question> {
        self.with_status(QuestionStatus::Pending)
    }

    /// Questions cleared for the speaker view, in source order.
    #[must_use]
    pub fn approved(&self) -> Vec<Question> {
        self.with_status(QuestionStatus::Approved)
    }

    fn with_status(&self, status: QuestionStatus) -> Vec<Question> {
        self.items.iter().filter(|q| q.status == status).cloned().collect()
    }
}
