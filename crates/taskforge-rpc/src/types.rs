//! Request and response types for the procedure contract.

use serde::{Deserialize, Serialize};
use taskforge_core::{Task, TaskDraft, TaskId, TaskPatch, TaskStatus};

/// Request to create a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTaskRequest {
    /// Title of the new task
    pub title: String,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional initial status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl AddTaskRequest {
    /// Request with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: None,
        }
    }
}

impl From<AddTaskRequest> for TaskDraft {
    fn from(request: AddTaskRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            status: request.status,
        }
    }
}

/// Request to fetch a task by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTaskRequest {
    /// Task id
    pub task_id: TaskId,
}

/// Request to merge a patch over an existing task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    /// Task id
    pub task_id: TaskId,

    /// Fields to overwrite; absent fields are left unchanged
    pub task: TaskPatch,
}

/// Request to delete a task by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTaskRequest {
    /// Task id
    pub task_id: TaskId,
}

/// Response carrying a single task plus a confirmation message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// The task in its post-operation state
    pub task: Task,

    /// Human-readable confirmation
    pub message: String,
}

/// Response to a list call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTasksResponse {
    /// Snapshot of all current tasks; order is unspecified
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// Response to a delete call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTaskResponse {
    /// Always `true` on success; a missing id is an error, not `false`
    pub success: bool,

    /// Human-readable confirmation
    pub message: String,
}
