//! Networking modules for the record-store websocket protocol.
//!
//! SYSTEM CONTEXT
//! ==============
//! `store_client` manages the websocket lifecycle and snapshot dispatch;
//! `types` pins the shared wire schema names used across the client.

pub mod store_client;
pub mod types;
