//! # Taskforge Core - Domain Types and Record Store
//!
//! This crate holds the task domain model and the concurrency-safe
//! in-memory store that owns the canonical copies of all task records.
//!
//! ## Components
//!
//! - **Task types**: [`Task`], [`TaskStatus`], [`TaskId`], plus the
//!   [`TaskDraft`] creation payload and the [`TaskPatch`] partial-update
//!   payload
//! - **Record store**: [`TaskStore`], a `RwLock`-guarded map that performs
//!   identity assignment and all record mutation
//!
//! ## Ownership Model
//!
//! The store exclusively owns the stored records. Every operation returns
//! owned clones, so mutating a returned [`Task`] never affects the stored
//! copy.
//!
//! ## Example
//!
//! ```rust
//! use taskforge_core::{TaskDraft, TaskStatus, TaskStore};
//!
//! # tokio_test::block_on(async {
//! let store = TaskStore::new();
//! let task = store.insert(TaskDraft::new("Buy milk")).await;
//!
//! assert_eq!(task.status, TaskStatus::Pending);
//! assert_eq!(store.get(&task.id).await, Some(task));
//! # });
//! ```

pub mod store;
pub mod task;

pub use store::TaskStore;
pub use task::{Task, TaskDraft, TaskId, TaskPatch, TaskStatus};
