//! Task record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a task record.
///
/// Identifiers are opaque UUID v4 strings assigned by the store at creation
/// and never reused, even after the record is deleted. The newtype keeps
/// task ids from being mixed up with other strings at compile time.
///
/// # Examples
///
/// ```rust
/// use taskforge_core::TaskId;
///
/// let id1 = TaskId::generate();
/// let id2 = TaskId::generate();
/// assert_ne!(id1, id2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generate a new random task ID using UUID v4.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the task ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<TaskId> for String {
    fn from(id: TaskId) -> Self {
        id.0
    }
}

/// Lifecycle status of a task.
///
/// Encoded on the wire with the exact variant spelling (`"Pending"`,
/// `"InProgress"`, `"Completed"`). Strings outside this set are rejected
/// at deserialization.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Task has been created but work has not started
    #[default]
    Pending,

    /// Task is actively being worked on
    InProgress,

    /// Task is done
    Completed,
}

impl TaskStatus {
    /// Get the wire spelling of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "InProgress",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A task record, the sole entity tracked by the service.
///
/// `id` and `created_at` are assigned by the store at creation and are
/// immutable for the lifetime of the record; updates can only touch
/// `title`, `description`, and `status` (see [`TaskPatch`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, assigned at creation
    pub id: TaskId,

    /// Short human-readable title
    pub title: String,

    /// Free-form description, empty when none was given
    #[serde(default)]
    pub description: String,

    /// Current lifecycle status
    pub status: TaskStatus,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Overwrite the fields present in `patch`, leaving the rest unchanged.
    ///
    /// `id` and `created_at` are not representable in a patch and therefore
    /// always survive unchanged.
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// Payload for creating a task.
///
/// Only `title` is required; the store fills in the defaults (empty
/// description, [`TaskStatus::Pending`]) along with the generated id and
/// creation timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    /// Short human-readable title
    pub title: String,

    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional initial status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl TaskDraft {
    /// Create a draft with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the initial status.
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Partial task payload for updates.
///
/// Only fields present in the patch are applied. The type intentionally
/// has no `id` or `created_at` fields: a caller supplying them in a JSON
/// body finds them ignored at deserialization, which is what keeps those
/// fields immutable regardless of patch contents.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    /// New title, if present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New description, if present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New status, if present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    /// True when the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }

    /// Patch only the title.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Patch only the description.
    pub fn description(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::default()
        }
    }

    /// Patch only the status.
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        Task {
            id: TaskId::generate(),
            title: "A".to_string(),
            description: "d".to_string(),
            status: TaskStatus::Pending,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_task_id_generation_is_unique() {
        let id1 = TaskId::generate();
        let id2 = TaskId::generate();

        assert_ne!(id1, id2);
        assert!(!id1.as_str().is_empty());
    }

    #[test]
    fn test_status_defaults_to_pending() {
        assert_eq!(TaskStatus::default(), TaskStatus::Pending);
    }

    #[test]
    fn test_status_wire_encoding() {
        let encoded = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(encoded, r#""InProgress""#);

        let decoded: TaskStatus = serde_json::from_str(r#""Completed""#).unwrap();
        assert_eq!(decoded, TaskStatus::Completed);
    }

    #[test]
    fn test_status_rejects_unknown_values() {
        let result = serde_json::from_str::<TaskStatus>(r#""Cancelled""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_overwrites_only_present_fields() {
        let mut task = sample_task();
        task.apply(TaskPatch::status(TaskStatus::Completed));

        assert_eq!(task.title, "A");
        assert_eq!(task.description, "d");
        assert_eq!(task.status, TaskStatus::Completed);
    }

    #[test]
    fn test_apply_preserves_id_and_created_at() {
        let mut task = sample_task();
        let id = task.id.clone();
        let created_at = task.created_at;

        task.apply(TaskPatch {
            title: Some("B".to_string()),
            description: Some("e".to_string()),
            status: Some(TaskStatus::InProgress),
        });

        assert_eq!(task.id, id);
        assert_eq!(task.created_at, created_at);
        assert_eq!(task.title, "B");
    }

    #[test]
    fn test_patch_ignores_unknown_json_fields() {
        // A caller trying to smuggle a new id through the patch body finds
        // the field dropped at deserialization.
        let patch: TaskPatch = serde_json::from_str(
            r#"{"id": "forged-id", "createdAt": "2024-01-01T00:00:00Z", "title": "B"}"#,
        )
        .unwrap();

        assert_eq!(patch.title.as_deref(), Some("B"));
        assert_eq!(patch.description, None);
        assert_eq!(patch.status, None);
    }

    #[test]
    fn test_empty_patch() {
        assert!(TaskPatch::default().is_empty());
        assert!(!TaskPatch::title("B").is_empty());
    }

    #[test]
    fn test_task_serializes_camel_case() {
        let task = sample_task();
        let value = serde_json::to_value(&task).unwrap();

        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_draft_builder() {
        let draft = TaskDraft::new("Buy milk")
            .with_description("2 liters")
            .with_status(TaskStatus::InProgress);

        assert_eq!(draft.title, "Buy milk");
        assert_eq!(draft.description.as_deref(), Some("2 liters"));
        assert_eq!(draft.status, Some(TaskStatus::InProgress));
    }
}
