//! Given steps for board BDD scenarios.

use super::world::{BoardWorld, run_async, title_list};
use eyre::WrapErr;
use kanban_board::board::services::{CreateColumnRequest, CreateTaskRequest};
use rstest_bdd_macros::given;

fn add_column(world: &mut BoardWorld, title: &str) -> Result<(), eyre::Report> {
    let column = run_async(world.service.add_column(CreateColumnRequest::new(title)))
        .wrap_err("add column in scenario setup")?;
    world.columns.insert(title.to_owned(), column.id());
    Ok(())
}

#[given(r#"a column "{title}" with tasks "{tasks}""#)]
fn column_with_tasks(
    world: &mut BoardWorld,
    title: String,
    tasks: String,
) -> Result<(), eyre::Report> {
    add_column(world, &title)?;
    let column = world.column(&title)?;
    // New tasks go to the top of the column, so add them bottom-up.
    for task_title in title_list(&tasks).into_iter().rev() {
        let task = run_async(
            world
                .service
                .add_task(CreateTaskRequest::new(column, task_title.clone())),
        )
        .wrap_err("add task in scenario setup")?;
        world.tasks.insert(task_title, task.id());
    }
    Ok(())
}

#[given(r#"an empty column "{title}""#)]
fn empty_column(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    add_column(world, &title)
}
