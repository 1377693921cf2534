use std::fmt::Write;

use colored::Colorize;

use crate::client::TaskView;
use crate::stats::TaskStats;

pub fn render_task(task: &TaskView) -> String {
    if task.completed {
        format!(
            "{} {}\n    Task #{} • {}",
            "✓".green().bold(),
            task.title.strikethrough(),
            task.id,
            "Completed".green()
        )
    } else {
        format!("{} {}\n    Task #{} • {}", "☐".dimmed(), task.title.bold(), task.id, "Pending".yellow())
    }
}

pub fn render_stats(stats: &TaskStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Statistics".cyan().bold());
    let _ = writeln!(out, "  Total Tasks: {}", stats.total);
    let _ = writeln!(out, "  Completed:   {}", stats.completed);
    let _ = writeln!(out, "  Pending:     {}", stats.pending);
    if stats.total > 0 {
        let _ = writeln!(out, "  Completion Rate: {:.1}%", stats.completion_rate);
    }
    out
}

/// Full dashboard view for a freshly fetched task list.
pub fn render_dashboard(tasks: &[TaskView]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Your Tasks".cyan().bold());
    if tasks.is_empty() {
        let _ = writeln!(out, "  No tasks yet! Add your first task with `dashboard add <title>`.");
        return out;
    }
    for task in tasks {
        let _ = writeln!(out, "{}", render_task(task));
    }
    let _ = writeln!(out);
    out.push_str(&render_stats(&TaskStats::from_tasks(tasks)));
    out
}
