//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render interaction surfaces while reading/writing shared
//! state through Leptos context providers.

pub mod question_card;
