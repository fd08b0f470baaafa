//! Frontend Models
//!
//! Data structures matching the server's JSON bodies.

use serde::{Deserialize, Serialize};

/// A single task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub text: String,
}

/// Both task lists of one employee, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskLists {
    #[serde(default)]
    pub todo: Vec<Item>,
    #[serde(default)]
    pub done: Vec<Item>,
}

/// Employee record (matches GET /api/employees/{empId})
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub emp_id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl Employee {
    /// Name shown in the header; falls back to the id when the record has none
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            format!("#{}", self.emp_id)
        } else {
            name.to_string()
        }
    }
}

/// Response of GET /api/employees/{empId}/tasks
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeTasks {
    pub emp_id: i64,
    #[serde(default)]
    pub todo: Vec<Item>,
    #[serde(default)]
    pub done: Vec<Item>,
}

impl EmployeeTasks {
    pub fn into_lists(self) -> TaskLists {
        TaskLists { todo: self.todo, done: self.done }
    }
}

/// Response of a successful add
#[derive(Debug, Clone, Deserialize)]
pub struct NewTaskResponse {
    pub id: String,
}

/// Failure body sent by the server for every error
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorBody {
    pub kind: String,
    pub status: u16,
    pub message: String,
}
