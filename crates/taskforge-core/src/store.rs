//! In-memory task record store.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;

use crate::task::{Task, TaskDraft, TaskId, TaskPatch};

/// Concurrency-safe in-memory store of task records.
///
/// `TaskStore` is the single source of truth for task state. It owns the
/// canonical copies of all records behind an internal `RwLock` and is the
/// only component that constructs or destroys a [`Task`]: identity and
/// creation timestamps are assigned here, and every operation hands back
/// owned clones rather than references into the map.
///
/// Reads (`get`, `list`) share the read lock; mutations (`insert`,
/// `update`, `remove`) take the write lock, so a read-modify-write such as
/// [`TaskStore::update`] is atomic with respect to any other operation on
/// the same key. All data is lost when the process terminates.
///
/// The store is constructed once at startup and shared via `Arc`; it is
/// never reachable as ambient global state.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: RwLock<HashMap<TaskId, Task>>,
}

impl TaskStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(HashMap::new()),
        }
    }

    /// Store a new record built from `draft`.
    ///
    /// Assigns a fresh unique id and creation timestamp and fills in the
    /// defaults (empty description, `Pending` status). Returns a copy of
    /// the stored record. Never fails.
    pub async fn insert(&self, draft: TaskDraft) -> Task {
        let task = Task {
            id: TaskId::generate(),
            title: draft.title,
            description: draft.description.unwrap_or_default(),
            status: draft.status.unwrap_or_default(),
            created_at: chrono::Utc::now(),
        };

        self.tasks
            .write()
            .await
            .insert(task.id.clone(), task.clone());

        debug!(task_id = %task.id, "Task record created");

        task
    }

    /// Get a copy of the record with the given id, if any.
    pub async fn get(&self, task_id: &TaskId) -> Option<Task> {
        self.tasks.read().await.get(task_id).cloned()
    }

    /// Snapshot of all current records.
    ///
    /// The returned sequence reflects the store at the instant of the call
    /// and is unaffected by later mutations. Order is unspecified.
    pub async fn list(&self) -> Vec<Task> {
        self.tasks.read().await.values().cloned().collect()
    }

    /// Merge `patch` over the record with the given id.
    ///
    /// The whole read-modify-write runs under one write-lock acquisition,
    /// so concurrent updates against the same id serialize and none of
    /// their field changes are lost. Returns a copy of the merged record,
    /// or `None` when no record with that id exists.
    pub async fn update(&self, task_id: &TaskId, patch: TaskPatch) -> Option<Task> {
        let mut tasks = self.tasks.write().await;
        let task = tasks.get_mut(task_id)?;
        task.apply(patch);

        debug!(task_id = %task_id, "Task record updated");

        Some(task.clone())
    }

    /// Remove the record with the given id.
    ///
    /// Returns `true` when a record was removed, `false` when the id was
    /// unknown.
    pub async fn remove(&self, task_id: &TaskId) -> bool {
        let removed = self.tasks.write().await.remove(task_id).is_some();
        if removed {
            debug!(task_id = %task_id, "Task record removed");
        }
        removed
    }

    /// Number of records currently stored.
    pub async fn len(&self) -> usize {
        self.tasks.read().await.len()
    }

    /// True when no records are stored.
    pub async fn is_empty(&self) -> bool {
        self.tasks.read().await.is_empty()
    }
}
