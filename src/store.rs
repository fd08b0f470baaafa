//! Task Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The state
//! transitions behind each user action are plain methods on [`BoardState`];
//! the controller feeds them server results.

use leptos::prelude::*;
use leptos_dragdrop::DropMove;
use reactive_stores::Store;

use crate::board::Column;
use crate::commands::ClientError;
use crate::models::{Item, TaskLists};

/// Lifecycle of the task page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Loading,
    Ready,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// Transient message shown above the board
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: AlertKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: AlertKind::Error, message: message.into() }
    }
}

/// Task page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Both lists in display order
    pub lists: TaskLists,
    pub phase: Phase,
    pub alert: Option<Alert>,
}

impl BoardState {
    /// Initial load finished. On failure the lists stay empty.
    pub fn finish_load(&mut self, result: Result<TaskLists, ClientError>) -> Option<Alert> {
        self.phase = Phase::Ready;
        match result {
            Ok(lists) => {
                self.lists = lists;
                None
            }
            Err(e) => {
                self.lists = TaskLists::default();
                Some(Alert::error(e.to_string()))
            }
        }
    }

    /// Add answered. The task appears only once the server has assigned its id.
    pub fn finish_add(&mut self, text: String, result: Result<String, ClientError>) -> Alert {
        match result {
            Ok(id) => {
                self.lists.push_todo(Item { id, text });
                Alert::success("Task added successfully")
            }
            Err(e) => Alert::error(e.to_string()),
        }
    }

    /// Remove the task before the server is asked
    pub fn begin_delete(&mut self, task_id: &str) -> bool {
        self.lists.remove(task_id)
    }

    /// Apply a drag locally; returns the snapshot to send when something moved
    pub fn begin_move(&mut self, mv: DropMove<Column>) -> Option<TaskLists> {
        if self.lists.apply(mv) {
            Some(self.lists.clone())
        } else {
            None
        }
    }

    /// Take the server's copy after a rejected local change. A failed fetch
    /// leaves the local lists as they are; returns whether they were replaced.
    pub fn reconcile(&mut self, fetched: Result<TaskLists, ClientError>) -> bool {
        match fetched {
            Ok(lists) => {
                self.lists = lists;
                true
            }
            Err(_) => false,
        }
    }
}

/// Answer to a change already applied locally (delete or replace).
///
/// Returns the alert to show and whether the board must be re-fetched.
pub fn sync_outcome(result: Result<(), ClientError>, success: &str) -> (Alert, bool) {
    match result {
        Ok(()) => (Alert::success(success), false),
        Err(e) => (Alert::error(e.to_string()), true),
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Run a state transition on the whole board and notify subscribers
pub fn store_apply<R>(store: &BoardStore, transition: impl FnOnce(&mut BoardState) -> R) -> R {
    let mut state = store.write();
    transition(&mut state)
}

/// Back to an empty, loading board (new session)
pub fn store_reset(store: &BoardStore) {
    store.lists().set(TaskLists::default());
    store.phase().set(Phase::Loading);
    store.alert().set(None);
}

pub fn store_set_alert(store: &BoardStore, alert: Alert) {
    store.alert().set(Some(alert));
}

pub fn store_clear_alert(store: &BoardStore) {
    store.alert().set(None);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> Item {
        Item { id: id.to_string(), text: format!("task {}", id) }
    }

    fn ready(todo: Vec<Item>, done: Vec<Item>) -> BoardState {
        BoardState {
            lists: TaskLists { todo, done },
            phase: Phase::Ready,
            alert: None,
        }
    }

    fn offline() -> ClientError {
        ClientError::Network("offline".to_string())
    }

    fn server_error() -> ClientError {
        ClientError::Api {
            kind: "StoreWriteFailed".to_string(),
            status: 500,
            message: "task lists were not updated for empId 1007".to_string(),
        }
    }

    #[test]
    fn test_load_success_fills_lists() {
        let mut state = BoardState::default();
        let lists = TaskLists { todo: vec![item("a")], done: vec![item("b")] };

        assert_eq!(state.finish_load(Ok(lists.clone())), None);
        assert_eq!(state.phase, Phase::Ready);
        assert_eq!(state.lists, lists);
    }

    #[test]
    fn test_load_failure_leaves_lists_empty() {
        let mut state = BoardState::default();

        let alert = state.finish_load(Err(offline())).unwrap();
        assert_eq!(alert.kind, AlertKind::Error);
        assert_eq!(state.phase, Phase::Ready);
        assert_eq!(state.lists, TaskLists::default());
    }

    #[test]
    fn test_add_appends_server_id_at_todo_tail() {
        let mut state = ready(vec![item("a")], vec![]);

        let alert = state.finish_add("new task".to_string(), Ok("id-9".to_string()));
        assert_eq!(alert, Alert::success("Task added successfully"));
        assert_eq!(
            state.lists.todo.last(),
            Some(&Item { id: "id-9".to_string(), text: "new task".to_string() })
        );
    }

    #[test]
    fn test_failed_add_leaves_lists_unchanged() {
        let mut state = ready(vec![item("a")], vec![item("b")]);
        let before = state.lists.clone();

        let alert = state.finish_add("new task".to_string(), Err(server_error()));
        assert_eq!(alert.kind, AlertKind::Error);
        assert_eq!(alert.message, "task lists were not updated for empId 1007");
        assert_eq!(state.lists, before);
    }

    #[test]
    fn test_delete_removes_before_server_answers() {
        let mut state = ready(vec![item("a"), item("b")], vec![item("c")]);

        assert!(state.begin_delete("c"));
        assert!(state.lists.done.is_empty());
        assert!(!state.begin_delete("missing"));
    }

    #[test]
    fn test_failed_delete_is_reconciled_from_server() {
        let mut state = ready(vec![item("a"), item("b")], vec![]);
        state.begin_delete("b");

        let (alert, refetch) = sync_outcome(Err(server_error()), "Task deleted successfully");
        assert_eq!(alert.kind, AlertKind::Error);
        assert!(refetch);

        // Server still holds the task, so it comes back
        let server_copy = TaskLists { todo: vec![item("a"), item("b")], done: vec![] };
        assert!(state.reconcile(Ok(server_copy.clone())));
        assert_eq!(state.lists, server_copy);
    }

    #[test]
    fn test_successful_sync_needs_no_refetch() {
        let (alert, refetch) = sync_outcome(Ok(()), "Task deleted successfully");
        assert_eq!(alert, Alert::success("Task deleted successfully"));
        assert!(!refetch);
    }

    #[test]
    fn test_failed_move_is_reconciled_from_server() {
        let mut state = ready(vec![item("a"), item("b")], vec![]);
        let before = state.lists.clone();

        let snapshot = state
            .begin_move(DropMove::Transfer { from_list: Column::Todo, to_list: Column::Done, from: 0, to: 0 })
            .unwrap();
        assert_eq!(snapshot, state.lists);
        assert_eq!(state.lists.done, vec![item("a")]);

        let (_, refetch) = sync_outcome(Err(offline()), "Task list updated");
        assert!(refetch);
        assert!(state.reconcile(Ok(before.clone())));
        assert_eq!(state.lists, before);
    }

    #[test]
    fn test_failed_refetch_keeps_local_lists() {
        let mut state = ready(vec![item("b")], vec![item("a")]);
        let local = state.lists.clone();

        assert!(!state.reconcile(Err(offline())));
        assert_eq!(state.lists, local);
    }

    #[test]
    fn test_noop_move_sends_nothing() {
        let mut state = ready(vec![item("a")], vec![]);
        assert_eq!(state.begin_move(DropMove::Reorder { list: Column::Todo, from: 0, to: 1 }), None);
    }
}
