//! Task Board Controller
//!
//! Calls the backend for each user action and feeds the answer to the
//! matching [`BoardState`](crate::store::BoardState) transition. Add waits for
//! the server before showing the task; delete and drag update the board first.
//! When one of those optimistic changes is rejected, the board is reloaded
//! from the server.

use leptos_dragdrop::DropMove;

use crate::alert::{show_alert, show_error};
use crate::board::{validate_task_text, Column};
use crate::commands;
use crate::models::{EmployeeTasks, TaskLists};
use crate::store::{store_apply, sync_outcome, BoardStore};

async fn fetch_lists(emp_id: i64) -> Result<TaskLists, commands::ClientError> {
    commands::get_tasks(emp_id).await.map(EmployeeTasks::into_lists)
}

/// Initial load of the employee's lists
pub async fn load_tasks(store: BoardStore, emp_id: i64) {
    let result = fetch_lists(emp_id).await;
    if let Ok(lists) = &result {
        web_sys::console::log_1(
            &format!("[TASKS] Loaded {} todo, {} done", lists.todo.len(), lists.done.len()).into(),
        );
    }
    if let Some(alert) = store_apply(&store, |state| state.finish_load(result)) {
        show_alert(store, alert);
    }
}

/// Returns true when the task was added, so the form can reset
pub async fn add_task(store: BoardStore, emp_id: i64, text: String) -> bool {
    if let Err(msg) = validate_task_text(&text) {
        show_error(store, msg);
        return false;
    }
    let result = commands::add_task(emp_id, &text).await;
    let added = result.is_ok();
    let alert = store_apply(&store, |state| state.finish_add(text, result));
    show_alert(store, alert);
    added
}

pub async fn delete_task(store: BoardStore, emp_id: i64, task_id: String) {
    store_apply(&store, |state| state.begin_delete(&task_id));
    let result = commands::delete_task(emp_id, &task_id).await;
    finish_sync(store, emp_id, result, "Task deleted successfully").await;
}

/// Apply a drag locally, then replace both lists on the server
pub async fn drop_task(store: BoardStore, emp_id: i64, mv: DropMove<Column>) {
    let Some(snapshot) = store_apply(&store, |state| state.begin_move(mv)) else {
        return;
    };
    let result = commands::update_tasks(emp_id, &snapshot).await;
    finish_sync(store, emp_id, result, "Task list updated").await;
}

async fn finish_sync(
    store: BoardStore,
    emp_id: i64,
    result: Result<(), commands::ClientError>,
    success: &str,
) {
    let (alert, refetch) = sync_outcome(result, success);
    show_alert(store, alert);
    if refetch {
        let fetched = fetch_lists(emp_id).await;
        if let Err(e) = &fetched {
            web_sys::console::error_1(&format!("[TASKS] Reload failed: {}", e).into());
        }
        store_apply(&store, |state| state.reconcile(fetched));
    }
}
