//! Task Board Utilities
//!
//! List operations behind add, delete and drag-and-drop. Moves clamp their
//! indices the way the drop handlers produce them: a drop on the empty tail of
//! a list carries `index == len`.

use leptos_dragdrop::DropMove;

use crate::models::{Item, TaskLists};

pub const MIN_TASK_LEN: usize = 3;
pub const MAX_TASK_LEN: usize = 50;

/// Which list a task lives in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Todo,
    Done,
}

impl Column {
    pub fn title(&self) -> &'static str {
        match self {
            Column::Todo => "To Do",
            Column::Done => "Done",
        }
    }
}

impl TaskLists {
    pub fn list(&self, column: Column) -> &Vec<Item> {
        match column {
            Column::Todo => &self.todo,
            Column::Done => &self.done,
        }
    }

    pub fn list_mut(&mut self, column: Column) -> &mut Vec<Item> {
        match column {
            Column::Todo => &mut self.todo,
            Column::Done => &mut self.done,
        }
    }

    pub fn push_todo(&mut self, item: Item) {
        self.todo.push(item);
    }

    /// Remove a task from whichever list holds it
    pub fn remove(&mut self, task_id: &str) -> bool {
        let before = self.todo.len() + self.done.len();
        self.todo.retain(|item| item.id != task_id);
        self.done.retain(|item| item.id != task_id);
        before != self.todo.len() + self.done.len()
    }

    /// Move one item inside a list. Both indices are clamped to the list.
    pub fn move_within(&mut self, column: Column, from: usize, to: usize) -> bool {
        let list = self.list_mut(column);
        if list.is_empty() {
            return false;
        }
        let last = list.len() - 1;
        let from = from.min(last);
        let to = to.min(last);
        if from == to {
            return false;
        }
        let item = list.remove(from);
        list.insert(to, item);
        true
    }

    /// Move one item into another list, inserting at `to` (clamped to its length)
    pub fn transfer(&mut self, from_column: Column, to_column: Column, from: usize, to: usize) -> bool {
        if from_column == to_column {
            return self.move_within(from_column, from, to);
        }
        let source = self.list_mut(from_column);
        if source.is_empty() {
            return false;
        }
        let from = from.min(source.len() - 1);
        let item = source.remove(from);
        let target = self.list_mut(to_column);
        let to = to.min(target.len());
        target.insert(to, item);
        true
    }

    /// Apply a finished drag; returns whether the lists changed
    pub fn apply(&mut self, mv: DropMove<Column>) -> bool {
        match mv {
            DropMove::Reorder { list, from, to } => self.move_within(list, from, to),
            DropMove::Transfer { from_list, to_list, from, to } => {
                self.transfer(from_list, to_list, from, to)
            }
        }
    }
}

/// Form check run before an add is sent
pub fn validate_task_text(text: &str) -> Result<(), String> {
    let len = text.chars().count();
    if len == 0 {
        return Err("Task text is required".to_string());
    }
    if len < MIN_TASK_LEN {
        return Err(format!("Task text must be at least {} characters", MIN_TASK_LEN));
    }
    if len > MAX_TASK_LEN {
        return Err(format!("Task text must be at most {} characters", MAX_TASK_LEN));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> Item {
        Item { id: id.to_string(), text: format!("task {}", id) }
    }

    fn ids(list: &[Item]) -> Vec<&str> {
        list.iter().map(|i| i.id.as_str()).collect()
    }

    fn board() -> TaskLists {
        TaskLists {
            todo: vec![item("a"), item("b"), item("c")],
            done: vec![item("x")],
        }
    }

    #[test]
    fn test_reorder_down_and_up() {
        let mut lists = board();
        assert!(lists.apply(DropMove::Reorder { list: Column::Todo, from: 0, to: 2 }));
        assert_eq!(ids(&lists.todo), vec!["b", "c", "a"]);

        assert!(lists.apply(DropMove::Reorder { list: Column::Todo, from: 2, to: 0 }));
        assert_eq!(ids(&lists.todo), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_reorder_onto_tail_moves_to_end() {
        let mut lists = board();
        assert!(lists.move_within(Column::Todo, 0, 3));
        assert_eq!(ids(&lists.todo), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_reorder_to_same_position_is_noop() {
        let mut lists = board();
        assert!(!lists.move_within(Column::Todo, 2, 3));
        assert_eq!(lists, board());
    }

    #[test]
    fn test_transfer_inserts_at_target() {
        let mut lists = board();
        assert!(lists.apply(DropMove::Transfer {
            from_list: Column::Todo,
            to_list: Column::Done,
            from: 1,
            to: 0,
        }));
        assert_eq!(ids(&lists.todo), vec!["a", "c"]);
        assert_eq!(ids(&lists.done), vec!["b", "x"]);
    }

    #[test]
    fn test_transfer_into_empty_list() {
        let mut lists = TaskLists { todo: vec![item("a")], done: vec![] };
        assert!(lists.transfer(Column::Todo, Column::Done, 0, 5));
        assert!(lists.todo.is_empty());
        assert_eq!(ids(&lists.done), vec!["a"]);
    }

    #[test]
    fn test_transfer_from_empty_list_is_noop() {
        let mut lists = TaskLists { todo: vec![], done: vec![item("x")] };
        assert!(!lists.transfer(Column::Todo, Column::Done, 0, 0));
        assert_eq!(ids(&lists.done), vec!["x"]);
    }

    #[test]
    fn test_moves_keep_the_item_set() {
        let mut lists = board();
        lists.transfer(Column::Done, Column::Todo, 0, 1);
        lists.move_within(Column::Todo, 3, 0);
        let mut all: Vec<&str> = ids(&lists.todo);
        all.extend(ids(&lists.done));
        all.sort();
        assert_eq!(all, vec!["a", "b", "c", "x"]);
    }

    #[test]
    fn test_remove_from_either_list() {
        let mut lists = board();
        assert!(lists.remove("x"));
        assert!(lists.done.is_empty());
        assert!(lists.remove("b"));
        assert_eq!(ids(&lists.todo), vec!["a", "c"]);
        assert!(!lists.remove("missing"));
    }

    #[test]
    fn test_validate_task_text() {
        assert!(validate_task_text("").is_err());
        assert!(validate_task_text("ab").is_err());
        assert!(validate_task_text("abc").is_ok());
        assert!(validate_task_text(&"x".repeat(MAX_TASK_LEN)).is_ok());
        assert!(validate_task_text(&"x".repeat(MAX_TASK_LEN + 1)).is_err());
        // Counted in characters, not bytes
        assert!(validate_task_text("日本語").is_ok());
    }
}
