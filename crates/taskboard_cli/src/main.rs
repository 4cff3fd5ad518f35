//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `taskboard_core` linkage without a UI shell.
//! - Drive one scripted add/edit/delete session and print each snapshot.

use taskboard_core::{SubmitOutcome, TaskFormInput, TasksView, TasksViewModel};

fn main() {
    println!("taskboard_core ping={}", taskboard_core::ping());
    println!("taskboard_core version={}", taskboard_core::core_version());

    if let Err(err) = run_session() {
        eprintln!("session failed: {err}");
        std::process::exit(1);
    }
}

fn run_session() -> Result<(), Box<dyn std::error::Error>> {
    let mut view = TasksView::in_memory();

    view.open_add()?;
    if let SubmitOutcome::Rejected(err) = view.submit(TaskFormInput::with_title(""))? {
        println!("rejected: {err}");
    }
    view.cancel()?;

    view.open_add()?;
    let report = match view.submit(TaskFormInput {
        title: "Write report".to_string(),
        description: Some("Quarterly numbers".to_string()),
        due_date: Some("2026-10-22".to_string()),
        priority: Some("High".to_string()),
    })? {
        SubmitOutcome::Added(task) => task,
        other => return Err(format!("unexpected submit outcome: {other:?}").into()),
    };
    view.open_add()?;
    view.submit(TaskFormInput::with_title("Book travel"))?;
    print_snapshot("after add", &view.render());

    view.open_edit(report.id)?;
    let mut draft = view.draft().clone();
    draft.title = "Write final report".to_string();
    view.submit(draft)?;
    print_snapshot("after edit", &view.render());

    view.delete(report.id);
    print_snapshot("after delete", &view.render());

    for notification in view.drain_notifications() {
        println!("toast: {}", notification.message());
    }
    Ok(())
}

fn print_snapshot(label: &str, model: &TasksViewModel) {
    println!("-- {label}");
    if model.empty {
        println!("   (no tasks)");
    }
    for row in &model.rows {
        println!(
            "   #{} {} | {} | {}",
            row.id, row.title, row.due_label, row.priority_label
        );
    }
}
