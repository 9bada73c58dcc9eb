// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the remote client.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::remote::{PushOutcome, RemoteClient, RemoteError};
use super::transport_tests::{MockTransport, Reply};
use gym_core::PendingChange;
use serde_json::json;

fn client(mock: MockTransport) -> RemoteClient<MockTransport> {
    RemoteClient::with_transport(mock)
}

#[tokio::test]
async fn test_fetch_students_maps_rows() {
    let mock = MockTransport::with_tables(
        json!([
            { "id": 1, "lastName": "Иванов", "firstName": "Петр", "group": "А-1", "isActive": "Да" },
            { "lastName": "Без номера" },
            { "id": "2", "lastName": "Сидоров", "isActive": false },
        ]),
        json!([]),
        json!([]),
    );
    let remote = client(mock);

    let students = remote.fetch_all_students().await.unwrap();
    assert_eq!(students.len(), 2);
    assert!(students[0].is_active);
    assert_eq!(students[1].id, 2);
    assert!(!students[1].is_active);
    assert_eq!(remote.transport().calls(), vec!["GET getAllStudents"]);
}

#[tokio::test]
async fn test_fetch_rejected_envelope() {
    let mock = MockTransport::new();
    mock.set_read("getExercises", Reply::rejected("sheet locked"));
    let remote = client(mock);

    let err = remote.fetch_exercises().await.unwrap_err();
    match err {
        RemoteError::Rejected(msg) => assert_eq!(msg, "sheet locked"),
        other => unreachable!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_missing_data_key() {
    let mock = MockTransport::new();
    mock.set_read("getGoals", Reply::Json(json!({ "success": true, "data": {} })));
    mock.set_read(
        "getExercises",
        Reply::Json(json!({ "success": true, "data": { "exercises": "nope" } })),
    );
    let remote = client(mock);

    assert!(matches!(
        remote.fetch_goals().await,
        Err(RemoteError::MissingData("goals"))
    ));
    assert!(matches!(
        remote.fetch_exercises().await,
        Err(RemoteError::MissingData("exercises"))
    ));
}

#[tokio::test]
async fn test_fetch_non_envelope_is_malformed() {
    let mock = MockTransport::new();
    mock.set_read("getAllStudents", Reply::Json(json!([1, 2, 3])));
    let remote = client(mock);

    assert!(matches!(
        remote.fetch_all_students().await,
        Err(RemoteError::Malformed(_))
    ));
}

#[tokio::test]
async fn test_fetch_snapshot_fails_as_a_whole() {
    let mock = MockTransport::new();
    mock.set_read("getAllStudents", Reply::rows("students", json!([{ "id": 1 }])));
    mock.set_read("getExercises", Reply::rows("exercises", json!([{ "id": 1 }])));
    mock.set_read("getGoals", Reply::Error("connection reset".into()));
    let remote = client(mock);

    assert!(matches!(
        remote.fetch_snapshot().await,
        Err(RemoteError::Transport(_))
    ));
}

#[tokio::test]
async fn test_fetch_snapshot_collects_tables() {
    let mock = MockTransport::with_tables(
        json!([{ "id": 1 }, { "id": 2 }]),
        json!([{ "id": 3, "name": "Выход силой на две" }]),
        json!([{ "id": "goal-1", "studentId": 1, "exerciseId": 3 }]),
    );
    let remote = client(mock);

    let snapshot = remote.fetch_snapshot().await.unwrap();
    assert_eq!(snapshot.students.len(), 2);
    assert_eq!(snapshot.exercises[0].name, "Выход силой на две");
    assert_eq!(snapshot.goals[0].id, "goal-1");
}

#[tokio::test]
async fn test_push_outcomes() {
    let mock = MockTransport::new();
    mock.push_write(Reply::rejected("goal not found"));
    mock.push_write(Reply::Error("timed out".into()));
    mock.push_write(Reply::Json(json!("not an envelope")));
    mock.push_write(Reply::Json(json!({ "success": false })));
    let remote = client(mock);
    let change = PendingChange::goal_delete("goal-1");

    assert_eq!(
        remote.push_change(&change).await,
        PushOutcome::Rejected {
            message: "goal not found".into()
        }
    );
    assert!(matches!(
        remote.push_change(&change).await,
        PushOutcome::Failed { .. }
    ));
    assert!(matches!(
        remote.push_change(&change).await,
        PushOutcome::Failed { .. }
    ));
    assert_eq!(
        remote.push_change(&change).await,
        PushOutcome::Rejected {
            message: "unknown error".into()
        }
    );
    assert!(remote.push_change(&change).await.is_accepted());
}

#[tokio::test]
async fn test_push_sends_action_body() {
    let remote = client(MockTransport::new());
    let change = PendingChange::goal_completion("goal-2", None);

    assert!(remote.push_change(&change).await.is_accepted());
    let posted = remote.transport().posted();
    assert_eq!(
        posted,
        vec![json!({
            "action": "updateGoal",
            "params": { "goalData": { "id": "goal-2", "dateCompleted": null } },
        })]
    );
}
