use super::*;
use crate::{Caret, DeletionKey, DropdownAction};

/// Type `query`, then accept the first match.
fn select_first(session: &mut AutoCompleteSession, query: &str) {
    type_string(session, query);
    let resp = session.select(0);
    assert!(resp.consumed);
}

// --- Backing out of a selection ---

#[test]
fn test_backspace_on_selection_removes_last_char() {
    let mut session = make_session();
    select_first(&mut session, "app");
    assert_eq!(session.selection(), Some("Apple"));
    assert_eq!(session.query(), "Apple");

    let resp = session.on_deletion_key(DeletionKey::Backspace, 3);
    assert!(resp.consumed);
    assert_eq!(resp.replace_text.as_deref(), Some("Appl"));
    assert!(session.selection().is_none());
    assert_eq!(session.query(), "Appl");
    // Caret stays where it was before the edit, not at the end.
    assert_eq!(resp.caret, Some(3));
    assert_eq!(session.caret(), 3);
}

#[test]
fn test_backspace_on_selection_refilters() {
    let mut session = make_session();
    select_first(&mut session, "app");

    let resp = session.on_deletion_key(DeletionKey::Backspace, 5);
    assert_eq!(items(&resp), vec!["Apple", "Pineapple", "Rose Apple"]);
    assert_eq!(resp.dropdown, DropdownAction::Show);
    // Pre-edit offset 5 no longer fits "Appl".
    assert_eq!(resp.caret, Some(4));
}

#[test]
fn test_delete_on_selection_clears_text() {
    let mut session = make_session();
    select_first(&mut session, "pear");
    assert_eq!(session.selection(), Some("Pear"));

    let resp = session.on_deletion_key(DeletionKey::Delete, 2);
    assert_eq!(resp.replace_text.as_deref(), Some(""));
    assert_eq!(session.query(), "");
    assert!(session.selection().is_none());
    assert_eq!(resp.caret, Some(0));
    assert_eq!(resp.dropdown, DropdownAction::Hide);
    assert_eq!(resp.list.unwrap().result.len(), FRUITS.len());
}

#[test]
fn test_backspace_removes_whole_last_char() {
    let mut session = make_session();
    select_first(&mut session, "acai");
    assert_eq!(session.query(), "Açaí");

    let resp = session.on_deletion_key(DeletionKey::Backspace, 4);
    assert_eq!(resp.replace_text.as_deref(), Some("Aça"));
    assert_eq!(resp.caret, Some(3));
}

// --- Without a selection ---

#[test]
fn test_deletion_without_selection_is_not_consumed() {
    let mut session = make_session();
    type_string(&mut session, "app");

    let resp = session.on_deletion_key(DeletionKey::Backspace, 3);
    assert!(!resp.consumed);
    assert!(resp.replace_text.is_none());
    assert!(resp.list.is_none());
    assert_eq!(session.query(), "app");
}

#[test]
fn test_host_edit_after_deletion_holds_caret() {
    let mut session = make_session();
    type_string(&mut session, "apple");

    // Host deleted the 'p' before offset 2 ("apple" -> "aple").
    let resp = session.handle_key(KeyEvent::Deletion {
        key: DeletionKey::Backspace,
        text: "aple".to_string(),
        caret_before: 2,
    });
    assert!(resp.consumed);
    assert!(resp.replace_text.is_none());
    assert_eq!(resp.caret, Some(2));
    assert_eq!(session.query(), "aple");
    assert!(items(&resp).is_empty());
}

#[test]
fn test_handle_key_deletion_on_selection_ignores_host_text() {
    let mut session = make_session();
    select_first(&mut session, "app");

    let resp = session.handle_key(KeyEvent::Deletion {
        key: DeletionKey::Backspace,
        text: "Appl".to_string(),
        caret_before: 4,
    });
    assert_eq!(resp.replace_text.as_deref(), Some("Appl"));
    assert_eq!(session.query(), "Appl");
    assert_eq!(resp.caret, Some(4));
}

#[test]
fn test_repeated_backspace_keeps_narrowing_from_full_list() {
    let mut session = make_session();
    type_string(&mut session, "app");
    let resp = session.on_text_changed("ap", Caret::At(2));
    assert_eq!(items(&resp).len(), 8);
    let resp = session.on_text_changed("a", Caret::At(1));
    assert_eq!(items(&resp).len(), 46);
}
