//! # Taskforge Gateway - HTTP Front for the Task Service
//!
//! This crate exposes the task service over a REST API:
//!
//! | Method | Path              | Procedure  | Failure |
//! |--------|-------------------|------------|---------|
//! | GET    | /api/tasks        | ListTasks  | —       |
//! | POST   | /api/tasks        | AddTask    | 400     |
//! | GET    | /api/tasks/{id}   | GetTask    | 404     |
//! | PUT    | /api/tasks/{id}   | UpdateTask | 404/400 |
//! | DELETE | /api/tasks/{id}   | DeleteTask | 404     |
//!
//! The gateway is the only layer that translates typed procedure errors
//! into transport status codes. It holds one long-lived
//! [`taskforge_rpc::TaskService`] handle shared across all requests.

pub mod server;
pub mod shutdown;

pub use server::TaskGateway;
pub use shutdown::shutdown_signal;
