use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::validation::{Rule, Validate};

/// Create body: only the title; new tasks always start pending.
/// Updates use [`TaskPayload`], which requires both fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPayload {
    pub title: String,
    pub completed: bool,
}

impl From<NewTask> for TaskPayload {
    fn from(task: NewTask) -> Self {
        Self { title: task.title, completed: false }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i32,
    #[serde(flatten)]
    pub task: TaskPayload,
}

impl Validate for TaskPayload {
    const RULES: &'static [Rule<Self>] = &[Rule {
        field: "title",
        message: "must not be empty",
        check: |p| !p.title.is_empty(),
    }];
}

impl Record for Task {
    type Payload = TaskPayload;
    const KIND: &'static str = "Task";

    fn id(&self) -> i32 {
        self.id
    }

    fn create(id: i32, payload: TaskPayload) -> Self {
        Self { id, task: payload }
    }

    fn replace(&mut self, payload: TaskPayload) {
        self.task = payload;
    }
}
