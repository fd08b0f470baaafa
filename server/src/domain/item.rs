//! Task Item
//!
//! A single task owned by an employee. Items carry no position field: their
//! order is the order of the list that holds them.

use serde::{Deserialize, Serialize};

/// A task in an employee's `todo` or `done` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Item {
    /// Opaque identifier, assigned by the store when the item is appended
    pub id: String,
    /// Task text
    pub text: String,
}

impl Item {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}
