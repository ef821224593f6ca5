//! Text rendering for project/task listings.

use crate::model::task::{Project, Task};

/// Indentation in front of every task line.
pub const TASK_INDENT: &str = "    ";

/// Renders `    [x] <id>: <description>`.
pub fn render_task(task: &Task) -> String {
    format!(
        "{TASK_INDENT}[{}] {}: {}",
        task.marker(),
        task.id,
        task.description
    )
}

/// Renders every project followed by the tasks `keep` accepts.
///
/// Each project block is its name, its task lines and one blank line; a
/// project without accepted tasks still prints its name and the blank line.
pub fn render_projects<F>(projects: &[Project], keep: F) -> Vec<String>
where
    F: Fn(&Task) -> bool,
{
    let mut lines = Vec::new();
    for project in projects {
        lines.push(project.name.clone());
        lines.extend(
            project
                .tasks
                .iter()
                .filter(|task| keep(*task))
                .map(render_task),
        );
        lines.push(String::new());
    }
    lines
}
