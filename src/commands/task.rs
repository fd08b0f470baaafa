//! Task Commands
//!
//! Frontend bindings for the task endpoints.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Serialize;

use crate::models::{EmployeeTasks, NewTaskResponse, TaskLists};
use super::{check_status, client, read_json, url, ClientError};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct AddTaskArgs<'a> {
    text: &'a str,
}

fn tasks_url(emp_id: i64) -> String {
    url(&format!("/api/employees/{}/tasks", emp_id))
}

// ========================
// Commands
// ========================

pub async fn get_tasks(emp_id: i64) -> Result<EmployeeTasks, ClientError> {
    let resp = client().get(tasks_url(emp_id)).send().await?;
    read_json(resp).await
}

/// Returns the id the server assigned to the new task
pub async fn add_task(emp_id: i64, text: &str) -> Result<String, ClientError> {
    let resp = client()
        .post(tasks_url(emp_id))
        .json(&AddTaskArgs { text })
        .send()
        .await?;
    let created: NewTaskResponse = read_json(resp).await?;
    Ok(created.id)
}

/// Replace both lists wholesale
pub async fn update_tasks(emp_id: i64, lists: &TaskLists) -> Result<(), ClientError> {
    let resp = client().put(tasks_url(emp_id)).json(lists).send().await?;
    check_status(resp).await?;
    Ok(())
}

pub async fn delete_task(emp_id: i64, task_id: &str) -> Result<(), ClientError> {
    let resp = client()
        .delete(url(&format!(
            "/api/employees/{}/tasks/{}",
            emp_id,
            utf8_percent_encode(task_id, NON_ALPHANUMERIC)
        )))
        .send()
        .await?;
    check_status(resp).await?;
    Ok(())
}
