//! Board service flows against the in-memory repository.

use std::sync::Arc;

use super::helpers::{column_with_tasks, empty_service, titles_in};
use kanban_board::board::{
    domain::{ColumnDeletion, DragEndEvent, Priority},
    ports::BoardRepository,
    services::{BoardConfig, BoardService, EditTaskRequest},
};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_survives_reopen_from_repository() {
    let (service, repository) = empty_service();
    let (today, tasks) = column_with_tasks(&service, "Today", &["Plan", "Build"]).await;
    let (week, _) = column_with_tasks(&service, "This Week", &["Review"]).await;
    let build = tasks.last().expect("two tasks").id();
    service
        .handle_drag_end(DragEndEvent::onto_column(build, week.id()))
        .await;
    let before = service.snapshot();

    let reopened =
        BoardService::open(repository, Arc::new(DefaultClock), BoardConfig::default()).await;
    let after = reopened.snapshot();

    assert_eq!(after, before);
    assert_eq!(titles_in(&after, today.id()), ["Plan"]);
    assert_eq!(titles_in(&after, week.id()), ["Review", "Build"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edited_task_keeps_identity_and_creation_time() {
    let (service, _) = empty_service();
    let (_, tasks) = column_with_tasks(&service, "Today", &["Plan"]).await;
    let original = tasks.first().expect("one task").clone();

    let edited = service
        .edit_task(
            EditTaskRequest::new(original.id())
                .with_title("Plan the sprint")
                .with_description("Capacity and goals")
                .with_priority(Some(Priority::High)),
        )
        .await
        .expect("edit should succeed");

    assert_eq!(edited.id(), original.id());
    assert_eq!(edited.created_at(), original.created_at());
    assert_eq!(
        edited.description().map(|text| text.as_str()),
        Some("Capacity and goals")
    );
    assert_eq!(edited.priority(), Some(Priority::High));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn column_deletion_commits_once_and_is_saved() {
    let (service, repository) = empty_service();
    let (todo, _) = column_with_tasks(&service, "To Do", &["A", "B"]).await;
    let (done, _) = column_with_tasks(&service, "Done", &["D"]).await;
    let mut receiver = service.subscribe();

    let board = service
        .delete_column(ColumnDeletion::move_tasks(todo.id(), Some(done.id())))
        .await
        .expect("deletion should succeed");

    assert!(receiver.has_changed().expect("sender is alive"));
    let observed = receiver.borrow_and_update().clone();
    assert_eq!(observed, board);
    assert!(observed.column(todo.id()).is_none());
    assert_eq!(titles_in(&observed, done.id()), ["D", "A", "B"]);
    assert_eq!(
        repository.load().await.expect("load should succeed"),
        Some(board)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_task_removes_only_that_task() {
    let (service, _) = empty_service();
    let (todo, tasks) = column_with_tasks(&service, "To Do", &["A", "B", "C"]).await;
    let middle = tasks.get(1).expect("three tasks").id();

    service
        .delete_task(middle)
        .await
        .expect("deletion should succeed");

    assert_eq!(titles_in(&service.snapshot(), todo.id()), ["A", "C"]);
}
