//! Shared reactive state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! State lives in plain structs held by `RwSignal` context providers so
//! pages and components read one consistent projection of the store.

pub mod questions;
