//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::dashboard::DashboardPage;
use crate::state::questions::QuestionsState;
use records::StoreFrame;

/// Shared handle for sending frames to the record store.
///
/// Wraps the outbound channel of the active websocket connection. The
/// default value drops every send, which is the correct behavior before
/// the store client has connected and on the server.
#[derive(Clone, Debug, Default)]
pub struct StoreSender {
    #[cfg(feature = "hydrate")]
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

impl StoreSender {
    /// A sender backed by a live connection's outbound channel.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn new(tx: futures::channel::mpsc::UnboundedSender<String>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Enqueue a frame for the store without waiting for delivery.
    ///
    /// Returns `false` when no connection is active; the frame is dropped,
    /// matching the fire-and-forget write semantics of the dashboard.
    pub fn send(&self, frame: &StoreFrame) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.tx
                .as_ref()
                .is_some_and(|tx| tx.unbounded_send(records::encode_frame(frame)).is_ok())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = frame;
            false
        }
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and mounts the single dashboard
/// route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let questions = RwSignal::new(QuestionsState::default());
    let sender = RwSignal::new(StoreSender::default());

    provide_context(questions);
    provide_context(sender);

    view! {
        <Stylesheet id="leptos" href="/pkg/streamq.css"/>
        <Title text="StreamQ"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
