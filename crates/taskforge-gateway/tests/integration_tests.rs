//! Integration tests for the gateway and task client.
//!
//! These tests boot the real router on an ephemeral port and drive it over
//! HTTP, verifying the REST mapping, the error translation, and the
//! record-store invariants as seen from the wire.

use std::sync::Arc;
use std::time::Duration;

use taskforge_core::{TaskId, TaskPatch, TaskStatus, TaskStore};
use taskforge_gateway::TaskGateway;
use taskforge_rpc::{
    AddTaskRequest, ClientError, RpcError, TaskClient, TaskService,
};

// =============================================================================
// Helper Functions
// =============================================================================

/// Start a gateway on an ephemeral port and return its base URL
async fn start_test_server() -> String {
    let service = TaskService::new(Arc::new(TaskStore::new()));
    let gateway = TaskGateway::new(Arc::new(service));
    let router = gateway.router();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    // Give the server a moment to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    format!("http://{}", addr)
}

fn assert_not_found(err: ClientError) {
    assert!(
        matches!(err, ClientError::Rpc(RpcError::TaskNotFound { .. })),
        "expected TaskNotFound, got: {err}"
    );
}

// =============================================================================
// Tests: End-to-End Scenario
// =============================================================================

#[tokio::test]
async fn test_full_task_lifecycle() {
    let base_url = start_test_server().await;
    let client = TaskClient::new(&base_url).unwrap();

    // Add: id is generated, status defaults to Pending.
    let response = client
        .add_task(&AddTaskRequest::new("Buy milk"))
        .await
        .unwrap();
    assert!(!response.task.id.as_str().is_empty());
    assert_eq!(response.task.status, TaskStatus::Pending);
    assert_eq!(response.message, "Task added successfully");
    let created = response.task;

    // Get returns the same record.
    let fetched = client.get_task(&created.id).await.unwrap();
    assert_eq!(fetched.task, created);
    assert_eq!(fetched.message, "Task found");

    // Update the status; title and timestamps survive.
    let updated = client
        .update_task(&created.id, &TaskPatch::status(TaskStatus::Completed))
        .await
        .unwrap();
    assert_eq!(updated.task.status, TaskStatus::Completed);
    assert_eq!(updated.task.title, "Buy milk");
    assert_eq!(updated.task.created_at, created.created_at);

    // Delete succeeds.
    let deleted = client.delete_task(&created.id).await.unwrap();
    assert!(deleted.success);
    assert_eq!(deleted.message, "Task deleted");

    // Delete is terminal.
    assert_not_found(client.get_task(&created.id).await.unwrap_err());
}

// =============================================================================
// Tests: Listing
// =============================================================================

#[tokio::test]
async fn test_list_empty_then_one() {
    let base_url = start_test_server().await;
    let client = TaskClient::new(&base_url).unwrap();

    let listing = client.list_tasks().await.unwrap();
    assert!(listing.tasks.is_empty());

    client.add("X").await.unwrap();

    let listing = client.list_tasks().await.unwrap();
    assert_eq!(listing.tasks.len(), 1);
    assert_eq!(listing.tasks[0].title, "X");
}

#[tokio::test]
async fn test_list_reflects_deletes() {
    let base_url = start_test_server().await;
    let client = TaskClient::new(&base_url).unwrap();

    let keep = client.add("keep").await.unwrap();
    let doomed = client.add("drop").await.unwrap();

    client.delete_task(&doomed.id).await.unwrap();

    let listing = client.list_tasks().await.unwrap();
    assert_eq!(listing.tasks.len(), 1);
    assert_eq!(listing.tasks[0].id, keep.id);
}

// =============================================================================
// Tests: Not-Found Propagation
// =============================================================================

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let base_url = start_test_server().await;
    let client = TaskClient::new(&base_url).unwrap();

    assert_not_found(client.get_task(&TaskId::generate()).await.unwrap_err());
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let base_url = start_test_server().await;
    let client = TaskClient::new(&base_url).unwrap();

    let err = client
        .update_task(&TaskId::generate(), &TaskPatch::title("B"))
        .await
        .unwrap_err();
    assert_not_found(err);
}

#[tokio::test]
async fn test_delete_unknown_id_is_not_found() {
    let base_url = start_test_server().await;
    let client = TaskClient::new(&base_url).unwrap();

    assert_not_found(client.delete_task(&TaskId::generate()).await.unwrap_err());
}

#[tokio::test]
async fn test_not_found_wire_shape() {
    let base_url = start_test_server().await;

    let response = reqwest::get(format!("{}/api/tasks/no-such-task", base_url))
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], 404);
    assert_eq!(body["message"], "Task not found");
}

// =============================================================================
// Tests: Request Validation
// =============================================================================

#[tokio::test]
async fn test_unknown_status_value_is_rejected() {
    let base_url = start_test_server().await;
    let http = reqwest::Client::new();

    let response = http
        .post(format!("{}/api/tasks", base_url))
        .json(&serde_json::json!({"title": "x", "status": "Bogus"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn test_missing_title_is_rejected() {
    let base_url = start_test_server().await;
    let http = reqwest::Client::new();

    let response = http
        .post(format!("{}/api/tasks", base_url))
        .json(&serde_json::json!({"description": "no title"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_title_is_accepted() {
    // Titles are stored verbatim, empty or not.
    let base_url = start_test_server().await;
    let client = TaskClient::new(&base_url).unwrap();

    let task = client.add("").await.unwrap();
    assert_eq!(task.title, "");
}

#[tokio::test]
async fn test_patch_cannot_change_id_or_created_at() {
    let base_url = start_test_server().await;
    let client = TaskClient::new(&base_url).unwrap();
    let http = reqwest::Client::new();

    let created = client.add("Buy milk").await.unwrap();

    // Smuggle id and createdAt fields into a raw patch body.
    let response = http
        .put(format!("{}/api/tasks/{}", base_url, created.id))
        .json(&serde_json::json!({
            "id": "forged-id",
            "createdAt": "1999-01-01T00:00:00Z",
            "title": "Renamed",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let fetched = client.get_task(&created.id).await.unwrap().task;
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.created_at, created.created_at);
    assert_eq!(fetched.title, "Renamed");

    // The forged id never became addressable.
    let forged = TaskId::from("forged-id");
    assert_not_found(client.get_task(&forged).await.unwrap_err());
}

// =============================================================================
// Tests: Health
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let base_url = start_test_server().await;

    let response = reqwest::get(format!("{}/health", base_url)).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "taskforge-gateway");
}

// =============================================================================
// Tests: Concurrent Access Through the Wire
// =============================================================================

#[tokio::test]
async fn test_concurrent_adds_get_distinct_ids() {
    let base_url = start_test_server().await;
    let client = TaskClient::new(&base_url).unwrap();

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move { client.add(format!("task {}", i)).await })
        })
        .collect();

    let mut ids = std::collections::HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap().unwrap().id);
    }

    assert_eq!(ids.len(), 16);

    let listing = client.list_tasks().await.unwrap();
    assert_eq!(listing.tasks.len(), 16);
}

#[tokio::test]
async fn test_concurrent_disjoint_patches_all_apply() {
    let base_url = start_test_server().await;
    let client = TaskClient::new(&base_url).unwrap();

    let created = client.add("A").await.unwrap();

    let patches = [
        TaskPatch::title("B"),
        TaskPatch::description("fresh"),
        TaskPatch::status(TaskStatus::InProgress),
    ];

    let handles: Vec<_> = patches
        .into_iter()
        .map(|patch| {
            let client = client.clone();
            let id = created.id.clone();
            tokio::spawn(async move { client.update_task(&id, &patch).await })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }

    let merged = client.get_task(&created.id).await.unwrap().task;
    assert_eq!(merged.title, "B");
    assert_eq!(merged.description, "fresh");
    assert_eq!(merged.status, TaskStatus::InProgress);
}
