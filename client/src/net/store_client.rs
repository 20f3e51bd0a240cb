//! WebSocket client for the realtime record store.
//!
//! Manages the live-query lifecycle: connect, subscribe to the ordered
//! `questions` query, apply pushed snapshots, and reconnect with
//! exponential backoff when the store drops the connection. All websocket
//! logic is gated behind `#[cfg(feature = "hydrate")]` since it requires a
//! browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Transport and parse failures never reach the end user; they are logged
//! and absorbed by the reconnect loop. Acks and error frames for
//! fire-and-forget writes are logged only.

#[cfg(test)]
#[path = "store_client_test.rs"]
mod store_client_test;

use crate::net::types::{FrameStatus, QUESTIONS_COLLECTION, Question, StoreFrame};

#[cfg(feature = "hydrate")]
use crate::app::StoreSender;
#[cfg(feature = "hydrate")]
use crate::state::questions::{ConnectionStatus, QuestionsState};
#[cfg(feature = "hydrate")]
use leptos::prelude::{RwSignal, Set, Update};
#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

/// Build the `query:subscribe` request for the questions live query,
/// ordered by creation time ascending.
#[must_use]
pub fn build_query_subscribe_frame() -> StoreFrame {
    StoreFrame {
        id: uuid::Uuid::new_v4().to_string(),
        parent_id: None,
        ts: 0,
        collection: Some(QUESTIONS_COLLECTION.to_owned()),
        op: "query:subscribe".to_owned(),
        status: FrameStatus::Request,
        data: serde_json::json!({
            "order_by": "timestamp",
            "direction": "asc"
        }),
    }
}

/// Derive the store websocket URL from the page location.
///
/// The scheme follows the page protocol; deployment wiring beyond that
/// (credentials, path routing) belongs to the hosting configuration.
#[must_use]
pub fn store_ws_url(location_href: &str, host: &str) -> String {
    let ws_proto = if location_href.starts_with("https") { "wss" } else { "ws" };
    format!("{ws_proto}://{host}/store/ws")
}

/// Extract the ordered document list from a `query:snapshot` payload.
#[must_use]
pub fn parse_snapshot_documents(data: &serde_json::Value) -> Option<Vec<Question>> {
    let documents = data.get("documents")?.clone();
    serde_json::from_value(documents).ok()
}

/// Spawn the store client lifecycle as a local async task.
///
/// Installs the outbound channel into the shared [`StoreSender`] and
/// returns the alive flag; clearing it stops the loop at the next
/// disconnect instead of reconnecting.
#[cfg(feature = "hydrate")]
pub fn spawn_store_client(
    questions: RwSignal<QuestionsState>,
    sender: RwSignal<StoreSender>,
) -> Arc<AtomicBool> {
    use futures::channel::mpsc;

    let alive = Arc::new(AtomicBool::new(true));
    let (tx, rx) = mpsc::unbounded::<String>();
    sender.set(StoreSender::new(tx));

    leptos::task::spawn_local(store_client_loop(questions, rx, alive.clone()));

    alive
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "hydrate")]
async fn store_client_loop(
    questions: RwSignal<QuestionsState>,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
    alive: Arc<AtomicBool>,
) {
    use std::cell::RefCell;
    use std::rc::Rc;

    let rx = Rc::new(RefCell::new(rx));
    let mut backoff_ms: u32 = 1000;
    let max_backoff_ms: u32 = 10_000;

    while alive.load(Ordering::Relaxed) {
        questions.update(|q| q.connection_status = ConnectionStatus::Connecting);

        let location = web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        let host = web_sys::window()
            .and_then(|w| w.location().host().ok())
            .unwrap_or_else(|| "localhost:3000".to_owned());
        let ws_url = store_ws_url(&location, &host);

        match connect_and_run(&ws_url, questions, &rx).await {
            Ok(()) => {
                leptos::logging::log!("store disconnected cleanly");
            }
            Err(e) => {
                leptos::logging::warn!("store connection error: {e}");
            }
        }

        questions.update(|q| q.connection_status = ConnectionStatus::Disconnected);

        if !alive.load(Ordering::Relaxed) {
            break;
        }

        // Exponential backoff before reconnect.
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}

/// Connect, subscribe, and process messages until disconnect.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    questions: RwSignal<QuestionsState>,
    rx: &std::rc::Rc<std::cell::RefCell<futures::channel::mpsc::UnboundedReceiver<String>>>,
) -> Result<(), String> {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    // Each (re)connection starts a fresh subscription; the store answers
    // with a full snapshot, so no incremental catch-up is needed.
    let subscribe = records::encode_frame(&build_query_subscribe_frame());
    ws_write
        .send(Message::Text(subscribe))
        .await
        .map_err(|e| e.to_string())?;

    questions.update(|q| q.connection_status = ConnectionStatus::Connected);

    // Forward outgoing frames from the shared channel to the socket.
    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        while let Some(text) = rx_borrow.next().await {
            if ws_write.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: decode and dispatch incoming frames.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => match records::decode_frame(&text) {
                    Ok(frame) => dispatch_frame(&frame, questions),
                    Err(e) => {
                        leptos::logging::warn!("store frame parse error: {e}");
                    }
                },
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("store recv error: {e}");
                    break;
                }
            }
        }
    };

    // Run send/recv loops; when either finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}

/// Dispatch an incoming frame.
///
/// Snapshot pushes replace the question list wholesale; everything else is
/// ack/error traffic for fire-and-forget writes and is logged only.
#[cfg(feature = "hydrate")]
fn dispatch_frame(frame: &StoreFrame, questions: RwSignal<QuestionsState>) {
    match (frame.op.as_str(), frame.status) {
        ("query:snapshot", FrameStatus::Push) => {
            if let Some(items) = parse_snapshot_documents(&frame.data) {
                questions.update(|q| q.replace_snapshot(items));
            } else {
                leptos::logging::warn!("snapshot push with unreadable documents: {}", frame.data);
            }
        }
        (op, FrameStatus::Error) => {
            leptos::logging::warn!("store error frame for {op}: {}", frame.data);
        }
        (op, FrameStatus::Done) => {
            leptos::logging::log!("store ack: {op}");
        }
        _ => {}
    }
}
