//! Todo State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::BTreeSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::ErrorKind;
use crate::models::{Filter, Todo, TodoPatch};

/// Error currently shown in the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorNotice {
    pub kind: ErrorKind,
    /// Lets a scheduled clear tell whether it still owns the banner
    pub seq: u64,
}

/// Which in-flight set a request is tracked in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingSet {
    Deleting,
    Updating,
}

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Server-confirmed todos, in server order
    pub todos: Vec<Todo>,
    pub filter: Filter,
    /// Text of the new-todo field
    pub title_input: String,
    /// A create request is in flight
    pub adding: bool,
    /// Placeholder row for the in-flight create
    pub temp_todo: Option<Todo>,
    pub deleting_ids: BTreeSet<u32>,
    pub updating_ids: BTreeSet<u32>,
    pub error: Option<ErrorNotice>,
    pub notice_seq: u64,
}

pub type TodoStore = Store<TodoState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_append_todo(store: &TodoStore, todo: Todo) {
    store.todos().write().push(todo);
}

/// Remove every todo whose id is in `ids`
pub fn store_remove_todos(store: &TodoStore, ids: &[u32]) {
    if ids.is_empty() {
        return;
    }
    store.todos().write().retain(|todo| !ids.contains(&todo.id));
}

/// Merge `patch` into the todo with `id`
pub fn store_patch_todo(store: &TodoStore, id: u32, patch: &TodoPatch) {
    if let Some(todo) = store.todos().write().iter_mut().find(|todo| todo.id == id) {
        todo.apply(patch);
    }
}

pub fn store_set_completed(store: &TodoStore, ids: &[u32], completed: bool) {
    if ids.is_empty() {
        return;
    }
    store
        .todos()
        .write()
        .iter_mut()
        .filter(|todo| ids.contains(&todo.id))
        .for_each(|todo| todo.completed = completed);
}

pub fn store_mark_pending(store: &TodoStore, set: PendingSet, ids: &[u32]) {
    match set {
        PendingSet::Deleting => store.deleting_ids().write().extend(ids.iter().copied()),
        PendingSet::Updating => store.updating_ids().write().extend(ids.iter().copied()),
    }
}

pub fn store_unmark_pending(store: &TodoStore, set: PendingSet, id: u32) {
    match set {
        PendingSet::Deleting => store.deleting_ids().write().remove(&id),
        PendingSet::Updating => store.updating_ids().write().remove(&id),
    };
}

/// Replace the banner message, returning the notice's sequence number
pub fn store_show_error(store: &TodoStore, kind: ErrorKind) -> u64 {
    let seq = store.notice_seq().get_untracked() + 1;
    store.notice_seq().set(seq);
    store.error().set(Some(ErrorNotice { kind, seq }));
    seq
}

/// Clear the banner if it still shows notice `seq`
pub fn store_expire_error(store: &TodoStore, seq: u64) {
    let current = store.error().get_untracked();
    if current.is_some_and(|notice| notice.seq == seq) {
        store.error().set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, completed: bool) -> Todo {
        Todo {
            id,
            user_id: 1,
            title: format!("Todo {}", id),
            completed,
        }
    }

    fn make_store() -> TodoStore {
        Store::new(TodoState {
            todos: vec![make_todo(1, false), make_todo(2, true), make_todo(3, false)],
            ..Default::default()
        })
    }

    #[test]
    fn test_remove_and_patch() {
        let store = make_store();

        store_remove_todos(&store, &[2]);
        store_patch_todo(&store, 3, &TodoPatch::title("Renamed"));
        store_patch_todo(&store, 99, &TodoPatch::completed(true));

        let todos = store.todos().get_untracked();
        assert_eq!(todos.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(todos[1].title, "Renamed");
        assert!(!todos[1].completed);
    }

    #[test]
    fn test_set_completed_only_touches_listed_ids() {
        let store = make_store();
        store_set_completed(&store, &[1], true);

        let completed: Vec<bool> = store.todos().get_untracked().iter().map(|t| t.completed).collect();
        assert_eq!(completed, vec![true, true, false]);
    }

    #[test]
    fn test_pending_sets() {
        let store = make_store();
        store_mark_pending(&store, PendingSet::Deleting, &[1, 2]);
        store_mark_pending(&store, PendingSet::Updating, &[3]);
        store_unmark_pending(&store, PendingSet::Deleting, 1);

        assert_eq!(store.deleting_ids().get_untracked(), BTreeSet::from([2]));
        assert_eq!(store.updating_ids().get_untracked(), BTreeSet::from([3]));
    }

    #[test]
    fn test_stale_expiry_keeps_newer_notice() {
        let store = make_store();
        let first = store_show_error(&store, ErrorKind::Delete);
        let second = store_show_error(&store, ErrorKind::Update);

        store_expire_error(&store, first);
        assert_eq!(store.error().get_untracked().map(|n| n.kind), Some(ErrorKind::Update));

        store_expire_error(&store, second);
        assert_eq!(store.error().get_untracked(), None);
    }
}
