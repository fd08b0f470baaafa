//! Repository Layer - Core Traits
//!
//! Defines the abstract interface of the task store.
//! The HTTP layer only sees this trait, so tests can swap the SQLite
//! implementation for an in-memory double.

use async_trait::async_trait;
use crate::domain::{DomainResult, EmpId, Employee, Item, TaskLists};

/// Per-employee task storage
///
/// Every mutation is atomic for a single employee record: it either fully
/// applies or leaves the record untouched.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Load the employee record
    async fn get(&self, emp_id: EmpId) -> DomainResult<Employee>;

    /// Create an item with a fresh id at the tail of `todo`
    async fn append(&self, emp_id: EmpId, text: &str) -> DomainResult<Item>;

    /// Overwrite both lists. Contents are taken as given.
    async fn replace_lists(&self, emp_id: EmpId, lists: &TaskLists) -> DomainResult<()>;

    /// Remove an item from whichever list holds it; an absent item is not an error
    async fn remove(&self, emp_id: EmpId, item_id: &str) -> DomainResult<()>;
}
