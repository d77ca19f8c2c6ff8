//! Order preservation across unrelated mutations.

use super::helpers::{column_with_tasks, empty_service, titles_in};
use kanban_board::board::{domain::DragEndEvent, services::EditTaskRequest};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reordering_one_column_leaves_the_other_alone() {
    let (service, _) = empty_service();
    let (left, left_tasks) = column_with_tasks(&service, "Left", &["L1", "L2", "L3"]).await;
    let (right, _) = column_with_tasks(&service, "Right", &["R1", "R2"]).await;
    let first = left_tasks.first().expect("three tasks").id();
    let last = left_tasks.last().expect("three tasks").id();

    let board = service
        .handle_drag_end(DragEndEvent::onto_task(first, last))
        .await;

    assert_eq!(titles_in(&board, left.id()), ["L2", "L3", "L1"]);
    assert_eq!(titles_in(&board, right.id()), ["R1", "R2"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn editing_a_task_does_not_reorder_its_column() {
    let (service, _) = empty_service();
    let (column, tasks) = column_with_tasks(&service, "Today", &["A", "B", "C"]).await;
    let middle = tasks.get(1).expect("three tasks").id();

    service
        .edit_task(EditTaskRequest::new(middle).with_title("B2").with_color("#FFE1E1"))
        .await
        .expect("edit should succeed");

    assert_eq!(titles_in(&service.snapshot(), column.id()), ["A", "B2", "C"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repeated_cross_column_moves_stay_consistent() {
    let (service, _) = empty_service();
    let (left, left_tasks) = column_with_tasks(&service, "Left", &["A", "B"]).await;
    let (right, right_tasks) = column_with_tasks(&service, "Right", &["X"]).await;
    let a = left_tasks.first().expect("two tasks").id();
    let b = left_tasks.last().expect("two tasks").id();
    let x = right_tasks.first().expect("one task").id();

    service.handle_drag_end(DragEndEvent::onto_task(a, x)).await;
    let board = service.handle_drag_end(DragEndEvent::onto_task(b, a)).await;

    assert!(titles_in(&board, left.id()).is_empty());
    assert_eq!(titles_in(&board, right.id()), ["B", "A", "X"]);
    assert_eq!(board.tasks().len(), 3);
}
