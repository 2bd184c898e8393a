//! The task service, a procedural façade over the record store.

use std::sync::Arc;

use tracing::{debug, info};

use taskforge_core::TaskStore;

use crate::error::{RpcError, RpcResult};
use crate::types::{
    AddTaskRequest, DeleteTaskRequest, DeleteTaskResponse, GetTaskRequest, ListTasksResponse,
    TaskResponse, UpdateTaskRequest,
};

/// Procedural façade implementing the five task operations.
///
/// The service shapes requests into store operations and translates store
/// outcomes into the response contract: absence becomes
/// [`RpcError::TaskNotFound`], success becomes a response carrying the task
/// and a confirmation message. Each call yields exactly one response or
/// exactly one error.
///
/// The service holds the store behind an `Arc` and is itself cheap to share
/// across request handlers.
#[derive(Debug, Clone)]
pub struct TaskService {
    store: Arc<TaskStore>,
}

impl TaskService {
    /// Create a service over the given store.
    pub fn new(store: Arc<TaskStore>) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &Arc<TaskStore> {
        &self.store
    }

    /// Create a task from the request payload.
    ///
    /// Missing `description` and `status` fall back to the store defaults.
    /// Never fails.
    pub async fn add_task(&self, request: AddTaskRequest) -> RpcResult<TaskResponse> {
        let task = self.store.insert(request.into()).await;

        info!(task_id = %task.id, status = %task.status, "Task added");

        Ok(TaskResponse {
            task,
            message: "Task added successfully".to_string(),
        })
    }

    /// Fetch a task by id.
    pub async fn get_task(&self, request: GetTaskRequest) -> RpcResult<TaskResponse> {
        debug!(task_id = %request.task_id, "Getting task");

        let task = self
            .store
            .get(&request.task_id)
            .await
            .ok_or_else(|| RpcError::task_not_found(request.task_id.as_str()))?;

        Ok(TaskResponse {
            task,
            message: "Task found".to_string(),
        })
    }

    /// Snapshot of all tasks. Always succeeds; empty when the store is.
    pub async fn list_tasks(&self) -> RpcResult<ListTasksResponse> {
        let tasks = self.store.list().await;

        debug!(count = tasks.len(), "Listing tasks");

        Ok(ListTasksResponse { tasks })
    }

    /// Merge a patch over an existing task.
    pub async fn update_task(&self, request: UpdateTaskRequest) -> RpcResult<TaskResponse> {
        let task = self
            .store
            .update(&request.task_id, request.task)
            .await
            .ok_or_else(|| RpcError::task_not_found(request.task_id.as_str()))?;

        info!(task_id = %task.id, status = %task.status, "Task updated");

        Ok(TaskResponse {
            task,
            message: "Task updated successfully".to_string(),
        })
    }

    /// Delete a task by id.
    pub async fn delete_task(&self, request: DeleteTaskRequest) -> RpcResult<DeleteTaskResponse> {
        if !self.store.remove(&request.task_id).await {
            return Err(RpcError::task_not_found(request.task_id.as_str()));
        }

        info!(task_id = %request.task_id, "Task deleted");

        Ok(DeleteTaskResponse {
            success: true,
            message: "Task deleted".to_string(),
        })
    }
}
