use super::*;

fn question(id: &str, status: QuestionStatus, timestamp: i64) -> Question {
    Question {
        id: id.to_owned(),
        text: format!("question {id}"),
        status,
        timestamp,
    }
}

#[test]
fn questions_state_defaults() {
    let s = QuestionsState::default();
    assert!(s.items.is_empty());
    assert_eq!(s.connection_status, ConnectionStatus::Disconnected);
}

#[test]
fn replace_snapshot_swaps_the_whole_list() {
    let mut s = QuestionsState::default();
    s.replace_snapshot(vec![question("a", QuestionStatus::Pending, 1)]);
    assert_eq!(s.items.len(), 1);

    s.replace_snapshot(vec![
        question("b", QuestionStatus::Approved, 2),
        question("c", QuestionStatus::Pending, 3),
    ]);
    assert_eq!(s.items.len(), 2);
    assert!(s.items.iter().all(|q| q.id != "a"));
}

#[test]
fn pending_contains_exactly_the_pending_records() {
    let mut s = QuestionsState::default();
    s.replace_snapshot(vec![
        question("a", QuestionStatus::Pending, 1),
        question("b", QuestionStatus::Approved, 2),
        question("c", QuestionStatus::Rejected, 3),
        question("d", QuestionStatus::Pending, 4),
    ]);

    let pending = s.pending();
    assert_eq!(pending.len(), 2);
    assert!(pending.iter().all(|q| q.status == QuestionStatus::Pending));
}

#[test]
fn approved_contains_exactly_the_approved_records() {
    let mut s = QuestionsState::default();
    s.replace_snapshot(vec![
        question("a", QuestionStatus::Pending, 1),
        question("b", QuestionStatus::Approved, 2),
        question("c", QuestionStatus::Approved, 3),
    ]);

    let approved = s.approved();
    assert_eq!(approved.len(), 2);
    assert!(approved.iter().all(|q| q.status == QuestionStatus::Approved));
}

#[test]
fn rejected_records_appear_in_neither_filter() {
    let mut s = QuestionsState::default();
    s.replace_snapshot(vec![question("x", QuestionStatus::Rejected, 9)]);

    assert!(s.pending().is_empty());
    assert!(s.approved().is_empty());
}

#[test]
fn filters_preserve_source_order() {
    let mut s = QuestionsState::default();
    s.replace_snapshot(vec![
        question("a", QuestionStatus::Pending, 10),
        question("b", QuestionStatus::Pending, 20),
        question("c", QuestionStatus::Approved, 30),
        question("d", QuestionStatus::Pending, 40),
        question("e", QuestionStatus::Approved, 50),
    ]);

    let pending_ids: Vec<_> = s.pending().into_iter().map(|q| q.id).collect();
    assert_eq!(pending_ids, vec!["a", "b", "d"]);

    let approved_ids: Vec<_> = s.approved().into_iter().map(|q| q.id).collect();
    assert_eq!(approved_ids, vec!["c", "e"]);
}

#[test]
fn status_transition_moves_record_between_filters() {
    let mut s = QuestionsState::default();
    s.replace_snapshot(vec![question("a", QuestionStatus::Pending, 1)]);
    assert_eq!(s.pending().len(), 1);
    assert!(s.approved().is_empty());

    // The store confirms the approve and pushes a new snapshot.
    s.replace_snapshot(vec![question("a", QuestionStatus::Approved, 1)]);
    assert!(s.pending().is_empty());
    assert_eq!(s.approved().len(), 1);
}

#[test]
fn rejecting_removes_record_from_both_views() {
    let mut s = QuestionsState::default();
    s.replace_snapshot(vec![
        question("a", QuestionStatus::Pending, 1),
        question("b", QuestionStatus::Pending, 2),
    ]);

    s.replace_snapshot(vec![
        question("a", QuestionStatus::Pending, 1),
        question("b", QuestionStatus::Rejected, 2),
    ]);
    assert_eq!(s.pending().len(), 1);
    assert_eq!(s.pending()[0].id, "a");
    assert!(s.approved().is_empty());
}
