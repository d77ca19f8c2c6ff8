//! When steps for board BDD scenarios.

use super::world::{BoardWorld, run_async};
use kanban_board::board::domain::{ColumnDeletion, DragEndEvent};
use rstest_bdd_macros::when;

fn drag(world: &mut BoardWorld, event: DragEndEvent) {
    world.board_before_action = Some(world.service.snapshot());
    run_async(world.service.handle_drag_end(event));
}

fn delete(world: &mut BoardWorld, deletion: ColumnDeletion) {
    world.board_before_action = Some(world.service.snapshot());
    world.last_error = run_async(world.service.delete_column(deletion)).err();
}

#[when(r#"task "{active}" is dropped onto task "{over}""#)]
fn dropped_onto_task(
    world: &mut BoardWorld,
    active: String,
    over: String,
) -> Result<(), eyre::Report> {
    let event = DragEndEvent::onto_task(world.task(&active)?, world.task(&over)?);
    drag(world, event);
    Ok(())
}

#[when(r#"task "{active}" is dropped onto column "{column}""#)]
fn dropped_onto_column(
    world: &mut BoardWorld,
    active: String,
    column: String,
) -> Result<(), eyre::Report> {
    let event = DragEndEvent::onto_column(world.task(&active)?, world.column(&column)?);
    drag(world, event);
    Ok(())
}

#[when(r#"task "{active}" is released outside any drop target"#)]
fn released_outside(world: &mut BoardWorld, active: String) -> Result<(), eyre::Report> {
    let event = DragEndEvent::cancelled(world.task(&active)?);
    drag(world, event);
    Ok(())
}

#[when(r#"column "{column}" is deleted with its tasks"#)]
fn deleted_with_tasks(world: &mut BoardWorld, column: String) -> Result<(), eyre::Report> {
    let deletion = ColumnDeletion::delete_tasks(world.column(&column)?);
    delete(world, deletion);
    Ok(())
}

#[when(r#"column "{column}" is deleted moving its tasks to "{destination}""#)]
fn deleted_moving_tasks(
    world: &mut BoardWorld,
    column: String,
    destination: String,
) -> Result<(), eyre::Report> {
    let deletion =
        ColumnDeletion::move_tasks(world.column(&column)?, Some(world.column(&destination)?));
    delete(world, deletion);
    Ok(())
}

#[when(r#"column "{column}" is deleted moving its tasks nowhere"#)]
fn deleted_moving_tasks_nowhere(
    world: &mut BoardWorld,
    column: String,
) -> Result<(), eyre::Report> {
    let deletion = ColumnDeletion::move_tasks(world.column(&column)?, None);
    delete(world, deletion);
    Ok(())
}
