//! Moderation dashboard: submit, moderate, and present live questions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the single route of the app. It owns the store subscription for
//! its lifetime and coordinates the three surfaces: submission form,
//! moderator panel, and speaker view. All writes are fire-and-forget; the
//! page re-renders only when the store pushes a fresh snapshot.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::app::StoreSender;
use crate::components::question_card::QuestionCard;
use crate::net::types::{
    FrameStatus, NewQuestion, QUESTIONS_COLLECTION, QuestionStatus, StatusPatch, StoreFrame,
};
use crate::state::questions::{ConnectionStatus, QuestionsState};

/// Dashboard page: one submission form, the pending moderation queue, and
/// the approved speaker feed.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let questions = expect_context::<RwSignal<QuestionsState>>();
    let sender = expect_context::<RwSignal<StoreSender>>();

    // Open the live query for the lifetime of this page; tear it down
    // exactly once when the page unmounts.
    #[cfg(feature = "hydrate")]
    {
        let alive = crate::net::store_client::spawn_store_client(questions, sender);
        on_cleanup(move || {
            alive.store(false, std::sync::atomic::Ordering::Relaxed);
            // Dropping the sender closes the outbound channel, which ends
            // the connection and lets the client loop exit.
            sender.set(StoreSender::default());
        });
    }

    let draft = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(text) = submission_text(&draft.get()) else {
            return;
        };
        let frame = build_document_create_frame(&text, now_ms());
        if sender.get_untracked().send(&frame) {
            draft.set(String::new());
        }
    };

    let on_approve = Callback::new(move |id: String| {
        let _ = sender
            .get_untracked()
            .send(&build_status_update_frame(&id, QuestionStatus::Approved));
    });
    let on_reject = Callback::new(move |id: String| {
        let _ = sender
            .get_untracked()
            .send(&build_status_update_frame(&id, QuestionStatus::Rejected));
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h2 class="dashboard-page__title">"Live Questions"</h2>
                <Show when=move || {
                    !matches!(questions.get().connection_status, ConnectionStatus::Connected)
                }>
                    <span class="dashboard-page__status">"Reconnecting..."</span>
                </Show>
            </header>

            <form class="dashboard-page__form" on:submit=on_submit>
                <textarea
                    class="dashboard-page__draft"
                    placeholder="Enter a question to display on stream..."
                    prop:value=move || draft.get()
                    on:input=move |ev| {
                        draft.set(event_target_value(&ev));
                    }
                ></textarea>
                <button type="submit" class="btn btn--primary dashboard-page__submit">
                    "Submit Question"
                </button>
            </form>

            <ModeratorPanel questions=questions on_approve=on_approve on_reject=on_reject/>
            <SpeakerView questions=questions/>
        </div>
    }
}

/// Pending-question queue with approve/reject affordances per row.
#[component]
fn ModeratorPanel(
    questions: RwSignal<QuestionsState>,
    on_approve: Callback<String>,
    on_reject: Callback<String>,
) -> impl IntoView {
    view! {
        <section class="moderator-panel">
            <p class="moderator-panel__heading">"Moderator Panel (Pending Questions)"</p>
            {move || {
                questions
                    .get()
                    .pending()
                    .into_iter()
                    .map(|q| {
                        view! {
                            <QuestionCard question=q on_approve=on_approve on_reject=on_reject/>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </section>
    }
}

/// Read-only feed of approved questions for the speaker.
#[component]
fn SpeakerView(questions: RwSignal<QuestionsState>) -> impl IntoView {
    view! {
        <section class="speaker-view">
            <p class="speaker-view__heading">"Speaker View (Approved Questions)"</p>
            <Show when=move || questions.get().approved().is_empty()>
                <p class="speaker-view__empty">"No approved questions yet."</p>
            </Show>
            {move || {
                questions
                    .get()
                    .approved()
                    .into_iter()
                    .map(|q| view! { <div class="speaker-view__item">{q.text}</div> })
                    .collect::<Vec<_>>()
            }}
        </section>
    }
}

/// Trimmed submission text, or `None` for empty/whitespace-only drafts.
#[must_use]
pub fn submission_text(draft: &str) -> Option<String> {
    let trimmed = draft.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// Build the `document:create` request for a newly submitted question.
fn build_document_create_frame(text: &str, timestamp: i64) -> StoreFrame {
    let fields = NewQuestion {
        text: text.to_owned(),
        status: QuestionStatus::Pending,
        timestamp,
    };
    StoreFrame {
        id: uuid::Uuid::new_v4().to_string(),
        parent_id: None,
        ts: 0,
        collection: Some(QUESTIONS_COLLECTION.to_owned()),
        op: "document:create".to_owned(),
        status: FrameStatus::Request,
        data: serde_json::json!({ "fields": fields }),
    }
}

/// Build the `document:update` request moving a question to `status`.
fn build_status_update_frame(document_id: &str, status: QuestionStatus) -> StoreFrame {
    StoreFrame {
        id: uuid::Uuid::new_v4().to_string(),
        parent_id: None,
        ts: 0,
        collection: Some(QUESTIONS_COLLECTION.to_owned()),
        op: "document:update".to_owned(),
        status: FrameStatus::Request,
        data: serde_json::json!({
            "document_id": document_id,
            "fields": StatusPatch { status }
        }),
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch.
fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        {
            js_sys::Date::now() as i64
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
