//! Employee Record
//!
//! The per-employee task document: two ordered lists of items plus the
//! display name used at sign-in. The record is provisioned outside this
//! system; only its lists are mutated here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::item::Item;

/// Externally assigned employee number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmpId(pub i64);

impl fmt::Display for EmpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EmpId {
    type Err = DomainError;

    /// Strict parse of a positive integer: ASCII digits only, so no sign,
    /// whitespace or trailing garbage, and zero is rejected.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidInput(format!("'{}' is not an employee number", raw));
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        match raw.parse::<i64>() {
            Ok(n) if n > 0 => Ok(EmpId(n)),
            _ => Err(invalid()),
        }
    }
}

/// Both task lists of an employee, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskLists {
    pub todo: Vec<Item>,
    pub done: Vec<Item>,
}

impl TaskLists {
    pub fn new(todo: Vec<Item>, done: Vec<Item>) -> Self {
        Self { todo, done }
    }

    /// Iterate every item, `todo` first
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.todo.iter().chain(self.done.iter())
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.items().any(|item| item.id == item_id)
    }

    /// Remove the item from whichever list holds it. Returns false when absent.
    pub fn remove(&mut self, item_id: &str) -> bool {
        let before = self.todo.len() + self.done.len();
        self.todo.retain(|item| item.id != item_id);
        self.done.retain(|item| item.id != item_id);
        before != self.todo.len() + self.done.len()
    }
}

/// Employee record as stored and as returned by the employee lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub emp_id: EmpId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub todo: Vec<Item>,
    #[serde(default)]
    pub done: Vec<Item>,
}

impl Employee {
    /// Create an employee with empty task lists
    pub fn new(emp_id: EmpId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            emp_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            todo: Vec::new(),
            done: Vec::new(),
        }
    }

    pub fn tasks(&self) -> TaskLists {
        TaskLists::new(self.todo.clone(), self.done.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emp_id_parse() {
        assert_eq!("1007".parse::<EmpId>(), Ok(EmpId(1007)));
        assert!("abc".parse::<EmpId>().is_err());
        assert!("12abc".parse::<EmpId>().is_err());
        assert!("".parse::<EmpId>().is_err());
    }

    #[test]
    fn test_emp_id_must_be_positive_digits() {
        assert!("0".parse::<EmpId>().is_err());
        assert!("-3".parse::<EmpId>().is_err());
        assert!("+5".parse::<EmpId>().is_err());
        assert!(" 5".parse::<EmpId>().is_err());
        assert!("99999999999999999999".parse::<EmpId>().is_err());
        assert_eq!("007".parse::<EmpId>(), Ok(EmpId(7)));
    }

    #[test]
    fn test_remove_from_either_list() {
        let mut lists = TaskLists::new(
            vec![Item::new("a", "first")],
            vec![Item::new("b", "second")],
        );
        assert!(lists.remove("b"));
        assert!(lists.done.is_empty());
        assert!(!lists.remove("missing"));
        assert_eq!(lists.todo.len(), 1);
    }

    #[test]
    fn test_employee_wire_shape() {
        let employee = Employee::new(EmpId(137), "Ada", "Lovelace");
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["empId"], 137);
        assert_eq!(json["firstName"], "Ada");
        assert!(json["todo"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_task_lists_require_both_arrays() {
        assert!(serde_json::from_str::<TaskLists>(r#"{"todo":[]}"#).is_err());
        assert!(serde_json::from_str::<TaskLists>(r#"{"todo":[],"done":[],"extra":1}"#).is_err());
        assert!(serde_json::from_str::<TaskLists>(r#"{"todo":[],"done":[]}"#).is_ok());
    }
}
