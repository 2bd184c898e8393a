//! # Taskforge RPC - Procedure Contract and Task Service
//!
//! This crate defines the procedural contract between the HTTP gateway and
//! the record store: the five operations (Add, Get, List, Update, Delete),
//! their request/response payloads, and the error taxonomy the wire layers
//! translate from.
//!
//! ## Components
//!
//! - **Contract types**: one request/response pair per procedure
//! - **[`TaskService`]**: the façade implementing the procedures over a
//!   shared [`taskforge_core::TaskStore`]
//! - **[`TaskClient`]**: HTTP client for a running gateway (requires the
//!   `client` feature)
//!
//! Each procedure is a plain async method that returns exactly one
//! response or one typed error. The transport lives entirely in the
//! gateway; nothing in this crate knows about HTTP status codes.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use taskforge_core::TaskStore;
//! use taskforge_rpc::{AddTaskRequest, TaskService};
//!
//! # tokio_test::block_on(async {
//! let service = TaskService::new(Arc::new(TaskStore::new()));
//!
//! let response = service.add_task(AddTaskRequest::new("Buy milk")).await.unwrap();
//! assert_eq!(response.message, "Task added successfully");
//! # });
//! ```

pub mod error;
pub mod service;
pub mod types;

// Client module (requires client feature)
#[cfg(feature = "client")]
pub mod client;

// Re-export core types
pub use error::{ErrorResponse, RpcError, RpcResult};
pub use service::TaskService;
pub use types::{
    AddTaskRequest, DeleteTaskRequest, DeleteTaskResponse, GetTaskRequest, ListTasksResponse,
    TaskResponse, UpdateTaskRequest,
};

// Re-export client types
#[cfg(feature = "client")]
pub use client::{ClientError, ClientResult, TaskClient};
