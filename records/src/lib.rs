//! Shared record model and wire schema for the realtime record store.
//!
//! This crate owns the vocabulary used by the `client` when talking to the
//! external document store: the `Question` record and its status, the field
//! sets for create/update operations, and the `StoreFrame` envelope carried
//! over the websocket transport. It intentionally keeps frame payloads
//! flexible (`serde_json::Value`) while encoding as JSON text, which is what
//! the store speaks.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the store collection holding audience questions.
pub const QUESTIONS_COLLECTION: &str = "questions";

/// Error returned by [`decode_frame`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The raw text could not be parsed as a [`StoreFrame`].
    #[error("failed to parse store frame: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Moderation status of a question record.
///
/// A record starts at `Pending` and moves to `Approved` or `Rejected` by
/// explicit moderator action; no transition back to `Pending` exists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionStatus {
    /// Awaiting a moderator decision.
    #[default]
    Pending,
    /// Cleared for display to the audience/speaker.
    Approved,
    /// Permanently excluded from display; retained in the store.
    Rejected,
}

impl QuestionStatus {
    /// The lowercase wire name of this status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// An audience question as stored in the `questions` collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Opaque identifier assigned by the store on creation; immutable.
    pub id: String,
    /// Question text; set once at creation, never edited.
    pub text: String,
    /// Current moderation status.
    pub status: QuestionStatus,
    /// Creation time in milliseconds since the Unix epoch; the sort key for
    /// the live query and never mutated.
    pub timestamp: i64,
}

/// Field set sent with `document:create` for a new question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    /// Trimmed question text.
    pub text: String,
    /// Initial status; always `Pending` for audience submissions.
    pub status: QuestionStatus,
    /// Client-assigned creation time in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// Partial field set sent with `document:update` to change a status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPatch {
    /// The status the record transitions to.
    pub status: QuestionStatus,
}

/// Lifecycle position of a frame in a store exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Request frame sent by the client.
    Request,
    /// Unsolicited delivery from a live query (full snapshot).
    Push,
    /// Successful terminal response.
    Done,
    /// Error terminal response.
    Error,
}

/// A single message on the store websocket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreFrame {
    /// Unique identifier for this frame (UUID string).
    pub id: String,
    /// ID of the request frame this is responding to, if any.
    pub parent_id: Option<String>,
    /// Milliseconds since the Unix epoch when the frame was created.
    pub ts: i64,
    /// Collection context for this frame, if any.
    pub collection: Option<String>,
    /// Namespaced operation name, e.g. `"document:create"`.
    pub op: String,
    /// Lifecycle position of the frame.
    pub status: Status,
    /// Arbitrary JSON payload.
    pub data: Value,
}

/// Encode a frame as JSON text for the websocket.
#[must_use]
pub fn encode_frame(frame: &StoreFrame) -> String {
    // A StoreFrame contains only strings, integers, and JSON values, so
    // serialization cannot fail.
    serde_json::to_string(frame).unwrap_or_default()
}

/// Decode JSON text into a frame.
///
/// # Errors
///
/// Returns [`CodecError::Parse`] for malformed text or out-of-schema
/// `status`/field values.
pub fn decode_frame(text: &str) -> Result<StoreFrame, CodecError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
