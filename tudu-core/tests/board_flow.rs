//! End-to-end board flows through the public API.

use tudu_core::{FormMode, TodoBoard};

#[test]
fn create_edit_resubmit_flow() {
    let mut board = TodoBoard::new();
    assert!(board.is_empty());
    assert_eq!(board.mode(), FormMode::Create);

    board.submit("Buy milk").unwrap();
    assert_eq!(board.len(), 1);
    assert_eq!(board.items()[0].title, "Buy milk");
    assert_eq!(board.mode(), FormMode::Create);

    let original = board.items()[0].clone();
    let session = board.begin_edit(original.id).expect("item exists");
    assert_eq!(session.draft.title, "Buy milk");
    assert_eq!(board.mode(), FormMode::Edit);

    board.submit("Buy milk and eggs").unwrap();
    assert_eq!(board.len(), 1);
    let edited = &board.items()[0];
    assert_eq!(edited.id, original.id);
    assert_eq!(edited.created_at, original.created_at);
    assert_eq!(edited.title, "Buy milk and eggs");
    assert_eq!(board.mode(), FormMode::Create);
}

#[test]
fn delete_renumbers_nothing_in_the_model() {
    // Position labels are derived at render time; the model only promises
    // stable relative order after a removal.
    let mut board = TodoBoard::new();
    board.submit("one").unwrap();
    board.submit("two").unwrap();
    board.submit("three").unwrap();

    let first = board.items()[0].id;
    assert!(board.delete(first));

    let titles: Vec<_> = board.items().iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["two", "three"]);
}

#[test]
fn interleaved_creates_and_deletes_keep_order() {
    let mut board = TodoBoard::new();
    board.submit("a").unwrap();
    board.submit("b").unwrap();
    let b = board.items()[1].id;
    board.submit("c").unwrap();
    board.delete(b);
    board.submit("d").unwrap();

    let titles: Vec<_> = board.items().iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["a", "c", "d"]);
}
