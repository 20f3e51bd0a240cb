//! Pending-question row with button and swipe moderation triggers.
//!
//! DESIGN
//! ======
//! The row is one gesture surface: explicit approve/reject buttons plus a
//! pointer-drag bridge into the `gesture` crate's swipe tracker. Pointer
//! events cover touch, mouse, and pen, so a mouse drag is an equivalent
//! gesture source. Either trigger issues the same status update; neither
//! waits on the store.

#[cfg(test)]
#[path = "question_card_test.rs"]
mod question_card_test;

use leptos::prelude::*;

use gesture::{SwipeDirection, SwipeTracker};
use records::{Question, QuestionStatus};

/// The status a swipe direction resolves to: left rejects, right approves.
#[must_use]
pub fn swipe_to_decision(direction: SwipeDirection) -> QuestionStatus {
    match direction {
        SwipeDirection::Left => QuestionStatus::Rejected,
        SwipeDirection::Right => QuestionStatus::Approved,
    }
}

/// One pending question with approve/reject buttons and swipe handling.
#[component]
pub fn QuestionCard(
    question: Question,
    on_approve: Callback<String>,
    on_reject: Callback<String>,
) -> impl IntoView {
    let tracker = StoredValue::new(SwipeTracker::new());

    let decide = Callback::new({
        let id = question.id.clone();
        move |status: QuestionStatus| match status {
            QuestionStatus::Approved => on_approve.run(id.clone()),
            QuestionStatus::Rejected => on_reject.run(id.clone()),
            QuestionStatus::Pending => {}
        }
    });

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        tracker.update_value(|t| t.pointer_down(f64::from(ev.client_x()), f64::from(ev.client_y())));
    };
    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        let mut t = tracker.get_value();
        let fired = t.pointer_move(f64::from(ev.client_x()), f64::from(ev.client_y()));
        tracker.set_value(t);
        if let Some(direction) = fired {
            decide.run(swipe_to_decision(direction));
        }
    };
    let on_pointer_up = move |_| {
        tracker.update_value(SwipeTracker::pointer_up);
    };
    let on_pointer_cancel = move |_| {
        tracker.update_value(SwipeTracker::pointer_cancel);
    };
    let on_touch_move = move |ev: leptos::ev::TouchEvent| {
        // A swipe in progress must not double as a page scroll.
        if tracker.with_value(SwipeTracker::is_active) {
            ev.prevent_default();
        }
    };

    view! {
        <div
            class="question-card"
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_cancel
            on:touchmove=on_touch_move
        >
            <span class="question-card__text">{question.text}</span>
            <div class="question-card__actions">
                <button
                    class="question-card__approve"
                    on:click=move |_| decide.run(QuestionStatus::Approved)
                    title="Approve"
                    aria-label="Approve question"
                >
                    "✔"
                </button>
                <button
                    class="question-card__reject"
                    on:click=move |_| decide.run(QuestionStatus::Rejected)
                    title="Reject"
                    aria-label="Reject question"
                >
                    "✕"
                </button>
            </div>
        </div>
    }
}
