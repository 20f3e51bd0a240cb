use super::*;

#[test]
fn submission_text_trims_surrounding_whitespace() {
    assert_eq!(
        submission_text("  What time does the stream start?\n"),
        Some("What time does the stream start?".to_owned())
    );
}

#[test]
fn submission_text_keeps_plain_text_unchanged() {
    assert_eq!(submission_text("Will there be a replay?"), Some("Will there be a replay?".to_owned()));
}

#[test]
fn submission_text_drops_empty_draft() {
    assert_eq!(submission_text(""), None);
}

#[test]
fn submission_text_drops_whitespace_only_draft() {
    assert_eq!(submission_text("   \t\n  "), None);
}

#[test]
fn build_document_create_frame_creates_pending_question() {
    let frame = build_document_create_frame("What time does the stream start?", 1_748_000_000_000);
    assert_eq!(frame.op, "document:create");
    assert_eq!(frame.status, FrameStatus::Request);
    assert_eq!(frame.collection.as_deref(), Some("questions"));
    assert_eq!(
        frame.data,
        serde_json::json!({
            "fields": {
                "text": "What time does the stream start?",
                "status": "pending",
                "timestamp": 1_748_000_000_000_i64
            }
        })
    );
}

#[test]
fn build_status_update_frame_approves_document() {
    let frame = build_status_update_frame("q-1", QuestionStatus::Approved);
    assert_eq!(frame.op, "document:update");
    assert_eq!(frame.status, FrameStatus::Request);
    assert_eq!(frame.collection.as_deref(), Some("questions"));
    assert_eq!(
        frame.data,
        serde_json::json!({
            "document_id": "q-1",
            "fields": { "status": "approved" }
        })
    );
}

#[test]
fn build_status_update_frame_rejects_document() {
    let frame = build_status_update_frame("q-2", QuestionStatus::Rejected);
    assert_eq!(
        frame.data,
        serde_json::json!({
            "document_id": "q-2",
            "fields": { "status": "rejected" }
        })
    );
}

#[test]
fn request_frames_get_unique_ids() {
    let a = build_document_create_frame("a", 1);
    let b = build_document_create_frame("a", 1);
    assert_ne!(a.id, b.id);
}
