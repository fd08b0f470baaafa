//! Domain Layer
//!
//! Contains the employee task document and its items.
//! This layer has NO external dependencies (except serde and thiserror).

mod error;
mod employee;
mod item;

pub use error::{DomainError, DomainResult};
pub use employee::{EmpId, Employee, TaskLists};
pub use item::Item;
