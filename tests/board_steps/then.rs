//! Then steps for board BDD scenarios.

use super::world::{BoardWorld, title_list};
use kanban_board::board::{domain::BoardDomainError, services::BoardServiceError};
use rstest_bdd_macros::then;

#[then(r#"column "{column}" lists "{tasks}""#)]
fn column_lists(world: &BoardWorld, column: String, tasks: String) -> Result<(), eyre::Report> {
    let actual = world.titles_in(&column)?;
    let expected = title_list(&tasks);
    if actual != expected {
        return Err(eyre::eyre!(
            "expected column \"{column}\" to list {expected:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then(r#"column "{column}" is empty"#)]
fn column_is_empty(world: &BoardWorld, column: String) -> Result<(), eyre::Report> {
    let actual = world.titles_in(&column)?;
    eyre::ensure!(actual.is_empty(), "expected no tasks, found {actual:?}");
    Ok(())
}

#[then(r#"column "{column}" no longer exists"#)]
fn column_no_longer_exists(world: &BoardWorld, column: String) -> Result<(), eyre::Report> {
    let id = world.column(&column)?;
    let board = world.service.snapshot();
    eyre::ensure!(board.column(id).is_none(), "column \"{column}\" still exists");
    eyre::ensure!(
        board.tasks().iter().all(|task| task.column_id() != id),
        "tasks still reference deleted column \"{column}\""
    );
    Ok(())
}

#[then(r#"task "{task}" belongs to column "{column}""#)]
fn task_belongs_to(world: &BoardWorld, task: String, column: String) -> Result<(), eyre::Report> {
    let task_id = world.task(&task)?;
    let column_id = world.column(&column)?;
    let board = world.service.snapshot();
    let found = board
        .task(task_id)
        .ok_or_else(|| eyre::eyre!("task \"{task}\" is missing from the board"))?;
    eyre::ensure!(
        found.column_id() == column_id,
        "task \"{task}\" is not in column \"{column}\""
    );
    Ok(())
}

#[then(r#"the board holds tasks "{tasks}""#)]
fn board_holds_tasks(world: &BoardWorld, tasks: String) -> Result<(), eyre::Report> {
    let board = world.service.snapshot();
    let actual: Vec<String> = board
        .tasks()
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect();
    let expected = title_list(&tasks);
    eyre::ensure!(actual == expected, "expected {expected:?}, found {actual:?}");
    Ok(())
}

#[then("the board is unchanged")]
fn board_is_unchanged(world: &BoardWorld) -> Result<(), eyre::Report> {
    let before = world
        .board_before_action
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing board snapshot from the action step"))?;
    eyre::ensure!(
        *before == world.service.snapshot(),
        "board changed after a no-op action"
    );
    Ok(())
}

#[then("the deletion is refused for a missing destination")]
fn deletion_refused(world: &BoardWorld) -> Result<(), eyre::Report> {
    let error = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected the deletion to fail"))?;
    if !matches!(
        error,
        BoardServiceError::Domain(BoardDomainError::DeletionDestinationMissing(_))
    ) {
        return Err(eyre::eyre!(
            "expected DeletionDestinationMissing error, got {error:?}"
        ));
    }
    Ok(())
}
