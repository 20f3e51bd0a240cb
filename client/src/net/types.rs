//! Shared wire-schema re-exports for the store boundary.
//!
//! The `records` crate owns the schema so the store protocol stays in one
//! place; this module pins the names the rest of the client uses.

pub use records::{
    CodecError, NewQuestion, QUESTIONS_COLLECTION, Question, QuestionStatus, Status as FrameStatus,
    StatusPatch, StoreFrame, decode_frame, encode_frame,
};
