//! Employee Repository
//!
//! SQLite-backed implementation of [`TaskStore`]. Each employee is a single
//! row whose `todo` and `done` columns hold JSON arrays, so every mutation is
//! a read-modify-write of one row inside an IMMEDIATE transaction, run on the
//! pool's blocking threads.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult, EmpId, Employee, Item, TaskLists};
use super::db::DbPool;
use super::traits::TaskStore;

/// SQLite implementation of the task store
#[derive(Clone)]
pub struct EmployeeRepository {
    pool: Arc<DbPool>,
}

impl EmployeeRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Insert an employee unless one with the same id already exists.
    ///
    /// Returns true when a row was inserted. Existing records, including
    /// their task lists, are left untouched.
    pub async fn insert_if_absent(&self, employee: &Employee) -> DomainResult<bool> {
        let employee = employee.clone();
        self.pool
            .run(move |conn| {
                let inserted = conn.execute(
                    "INSERT OR IGNORE INTO employees (emp_id, first_name, last_name, todo, done)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![
                        employee.emp_id.0,
                        employee.first_name,
                        employee.last_name,
                        serde_json::to_string(&employee.todo)?,
                        serde_json::to_string(&employee.done)?,
                    ],
                )?;
                Ok(inserted == 1)
            })
            .await
    }
}

#[async_trait]
impl TaskStore for EmployeeRepository {
    async fn get(&self, emp_id: EmpId) -> DomainResult<Employee> {
        self.pool
            .run(move |conn| find_employee(conn, emp_id)?.ok_or(DomainError::EmployeeNotFound(emp_id)))
            .await
    }

    async fn append(&self, emp_id: EmpId, text: &str) -> DomainResult<Item> {
        let text = text.to_string();
        self.pool
            .run(move |conn| {
                let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

                let mut lists = find_lists(&tx, emp_id)?.ok_or(DomainError::EmployeeNotFound(emp_id))?;

                // v4 ids are random; regenerate on the (practically impossible) clash
                // so the id stays unique across both lists.
                let mut id = Uuid::new_v4().to_string();
                while lists.contains(&id) {
                    id = Uuid::new_v4().to_string();
                }
                let item = Item::new(id, text);
                lists.todo.push(item.clone());

                let changed = tx.execute(
                    "UPDATE employees SET todo = ?1 WHERE emp_id = ?2",
                    params![serde_json::to_string(&lists.todo)?, emp_id.0],
                )?;
                if changed != 1 {
                    return Err(DomainError::WriteFailed(format!(
                        "task was not added for empId {}",
                        emp_id
                    )));
                }

                tx.commit()?;
                log::debug!("Appended task {} for empId {}", item.id, emp_id);
                Ok(item)
            })
            .await
    }

    async fn replace_lists(&self, emp_id: EmpId, lists: &TaskLists) -> DomainResult<()> {
        let todo = serde_json::to_string(&lists.todo)?;
        let done = serde_json::to_string(&lists.done)?;
        self.pool
            .run(move |conn| {
                let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

                if !employee_exists(&tx, emp_id)? {
                    return Err(DomainError::EmployeeNotFound(emp_id));
                }

                let changed = tx.execute(
                    "UPDATE employees SET todo = ?1, done = ?2 WHERE emp_id = ?3",
                    params![todo, done, emp_id.0],
                )?;
                if changed != 1 {
                    return Err(DomainError::WriteFailed(format!(
                        "task lists were not updated for empId {}",
                        emp_id
                    )));
                }

                tx.commit()?;
                Ok(())
            })
            .await
    }

    async fn remove(&self, emp_id: EmpId, item_id: &str) -> DomainResult<()> {
        let item_id = item_id.to_string();
        self.pool
            .run(move |conn| {
                let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

                let mut lists = find_lists(&tx, emp_id)?.ok_or(DomainError::EmployeeNotFound(emp_id))?;
                if !lists.remove(&item_id) {
                    log::debug!("Task {} not present for empId {}, nothing to remove", item_id, emp_id);
                    return Ok(());
                }

                let changed = tx.execute(
                    "UPDATE employees SET todo = ?1, done = ?2 WHERE emp_id = ?3",
                    params![
                        serde_json::to_string(&lists.todo)?,
                        serde_json::to_string(&lists.done)?,
                        emp_id.0
                    ],
                )?;
                if changed != 1 {
                    return Err(DomainError::WriteFailed(format!(
                        "task {} was not removed for empId {}",
                        item_id, emp_id
                    )));
                }

                tx.commit()?;
                Ok(())
            })
            .await
    }
}

fn employee_exists(conn: &Connection, emp_id: EmpId) -> DomainResult<bool> {
    let found = conn
        .query_row(
            "SELECT 1 FROM employees WHERE emp_id = ?1",
            params![emp_id.0],
            |_| Ok(()),
        )
        .optional()?;
    Ok(found.is_some())
}

fn find_lists(conn: &Connection, emp_id: EmpId) -> DomainResult<Option<TaskLists>> {
    let row = conn
        .query_row(
            "SELECT todo, done FROM employees WHERE emp_id = ?1",
            params![emp_id.0],
            |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
        )
        .optional()?;

    match row {
        Some((todo, done)) => Ok(Some(TaskLists::new(
            serde_json::from_str(&todo)?,
            serde_json::from_str(&done)?,
        ))),
        None => Ok(None),
    }
}

fn find_employee(conn: &Connection, emp_id: EmpId) -> DomainResult<Option<Employee>> {
    let row = conn
        .query_row(
            "SELECT first_name, last_name, todo, done FROM employees WHERE emp_id = ?1",
            params![emp_id.0],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                ))
            },
        )
        .optional()?;

    match row {
        Some((first_name, last_name, todo, done)) => Ok(Some(Employee {
            emp_id,
            first_name,
            last_name,
            todo: serde_json::from_str(&todo)?,
            done: serde_json::from_str(&done)?,
        })),
        None => Ok(None),
    }
}
