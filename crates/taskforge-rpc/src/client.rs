//! HTTP client for the task gateway API.
//!
//! [`TaskClient`] is the programmatic counterpart of the gateway's REST
//! surface: one method per procedure, each decoding the success body or
//! mapping the HTTP status back to the matching [`RpcError`].
//!
//! # Connection Behavior
//!
//! The client holds a single pooled `reqwest::Client` for its lifetime;
//! connections are reused across calls to the same gateway rather than
//! reconstructed per request. It is `Clone`-able and safe to share across
//! tasks. No call is retried automatically: every procedure succeeds or
//! fails deterministically on the first attempt.
//!
//! # Example
//!
//! ```rust,ignore
//! use taskforge_rpc::client::TaskClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TaskClient::new("http://localhost:3000")?;
//!
//!     let task = client.add("Buy milk").await?;
//!     println!("Created task {}", task.id);
//!
//!     let listing = client.list_tasks().await?;
//!     println!("{} tasks tracked", listing.tasks.len());
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;
use url::Url;

use taskforge_core::{Task, TaskId, TaskPatch};

use crate::error::{ErrorResponse, RpcError};
use crate::types::{
    AddTaskRequest, DeleteTaskResponse, ListTasksResponse, TaskResponse,
};

/// Default timeout for HTTP requests
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Result type for client calls
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors a client call can yield.
///
/// Procedure-level failures reported by the gateway come back as the
/// matching [`RpcError`]; transport and decoding problems get their own
/// variants so callers can tell a missing task from a dead connection.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The gateway reported a procedure-level error
    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// The request never produced a usable response
    #[error("Connection error: {message}")]
    Connection { message: String },

    /// The response body did not match the contract
    #[error("Protocol error: {message}")]
    Protocol { message: String },

    /// The gateway base URL could not be parsed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ClientError {
    fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }
}

/// Client for a running task gateway
#[derive(Clone)]
pub struct TaskClient {
    /// Base URL of the gateway
    base_url: Url,
    /// Pooled HTTP client, shared across calls
    http: Client,
}

impl std::fmt::Debug for TaskClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskClient")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl TaskClient {
    /// Create a new client for the gateway at `base_url`.
    pub fn new(base_url: impl AsRef<str>) -> ClientResult<Self> {
        let base_url = Url::parse(base_url.as_ref())?;

        let http = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(format!("taskforge-rpc/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::connection(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { base_url, http })
    }

    /// Create a new client with a custom HTTP client.
    pub fn with_http_client(base_url: impl AsRef<str>, http: Client) -> ClientResult<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        Ok(Self { base_url, http })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn endpoint(&self, path: &str) -> ClientResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::protocol(format!("Invalid endpoint path: {}", e)))
    }

    // =========================================================================
    // Procedures
    // =========================================================================

    /// Create a task with only a title.
    pub async fn add(&self, title: impl Into<String>) -> ClientResult<Task> {
        let response = self.add_task(&AddTaskRequest::new(title)).await?;
        Ok(response.task)
    }

    /// Create a task from a full request payload.
    pub async fn add_task(&self, request: &AddTaskRequest) -> ClientResult<TaskResponse> {
        let url = self.endpoint("/api/tasks")?;

        debug!(url = %url, "Adding task");

        let response = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::connection(format!("Failed to add task: {}", e)))?;

        self.decode(None, response).await
    }

    /// Fetch a task by id.
    pub async fn get_task(&self, task_id: &TaskId) -> ClientResult<TaskResponse> {
        let url = self.endpoint(&format!("/api/tasks/{}", task_id))?;

        debug!(task_id = %task_id, "Fetching task");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::connection(format!("Failed to fetch task: {}", e)))?;

        self.decode(Some(task_id), response).await
    }

    /// Fetch a snapshot of all tasks.
    pub async fn list_tasks(&self) -> ClientResult<ListTasksResponse> {
        let url = self.endpoint("/api/tasks")?;

        debug!(url = %url, "Listing tasks");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::connection(format!("Failed to list tasks: {}", e)))?;

        self.decode(None, response).await
    }

    /// Merge a patch over an existing task.
    pub async fn update_task(
        &self,
        task_id: &TaskId,
        patch: &TaskPatch,
    ) -> ClientResult<TaskResponse> {
        let url = self.endpoint(&format!("/api/tasks/{}", task_id))?;

        debug!(task_id = %task_id, "Updating task");

        let response = self
            .http
            .put(url)
            .json(patch)
            .send()
            .await
            .map_err(|e| ClientError::connection(format!("Failed to update task: {}", e)))?;

        self.decode(Some(task_id), response).await
    }

    /// Delete a task by id.
    pub async fn delete_task(&self, task_id: &TaskId) -> ClientResult<DeleteTaskResponse> {
        let url = self.endpoint(&format!("/api/tasks/{}", task_id))?;

        debug!(task_id = %task_id, "Deleting task");

        let response = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(|e| ClientError::connection(format!("Failed to delete task: {}", e)))?;

        self.decode(Some(task_id), response).await
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Decode a success body, or map an error status back to an [`RpcError`].
    async fn decode<T: serde::de::DeserializeOwned>(
        &self,
        task_id: Option<&TaskId>,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(self.handle_error_response(task_id, status, response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::protocol(format!("Failed to parse response: {}", e)))
    }

    /// Translate an error response from the gateway.
    async fn handle_error_response(
        &self,
        task_id: Option<&TaskId>,
        status: StatusCode,
        response: reqwest::Response,
    ) -> ClientError {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.message)
            .unwrap_or(body);

        match status {
            StatusCode::NOT_FOUND => RpcError::task_not_found(
                task_id.map(TaskId::as_str).unwrap_or("unknown"),
            )
            .into(),
            StatusCode::BAD_REQUEST => RpcError::invalid_argument("request", message).into(),
            StatusCode::INTERNAL_SERVER_ERROR => RpcError::internal(message).into(),
            _ => ClientError::protocol(format!("HTTP {}: {}", status, message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = TaskClient::new("http://localhost:3000").unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:3000/");
    }

    #[test]
    fn test_client_rejects_invalid_url() {
        assert!(matches!(
            TaskClient::new("not a url"),
            Err(ClientError::Url(_))
        ));
    }

    #[test]
    fn test_endpoint_building() {
        let client = TaskClient::new("http://localhost:3000").unwrap();
        let url = client.endpoint("/api/tasks").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/tasks");
    }
}
