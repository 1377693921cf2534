use crate::client::TaskView;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Percentage in `0.0..=100.0`; `0.0` for an empty list.
    pub completion_rate: f64,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[TaskView]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        let completion_rate = if total == 0 { 0.0 } else { completed as f64 / total as f64 * 100.0 };
        Self { total, completed, pending: total - completed, completion_rate }
    }
}
