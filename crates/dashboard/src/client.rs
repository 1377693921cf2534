use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::errors::DashboardError;

/// Task as returned by the task service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskView {
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// HTTP client for `/tasks`.
#[derive(Clone)]
pub struct TaskClient {
    base: String,
    http: reqwest::Client,
}

impl TaskClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self { base, http: reqwest::Client::new() }
    }

    fn connection_error(&self, e: reqwest::Error) -> DashboardError {
        DashboardError::Connection { base: self.base.clone(), reason: e.to_string() }
    }

    fn check(&self, res: reqwest::Response) -> Result<reqwest::Response, DashboardError> {
        let status = res.status();
        if status.is_success() {
            Ok(res)
        } else {
            Err(DashboardError::Status(status.as_u16()))
        }
    }

    pub async fn list(&self) -> Result<Vec<TaskView>, DashboardError> {
        let res = self
            .http
            .get(format!("{}/tasks", self.base))
            .send()
            .await
            .map_err(|e| self.connection_error(e))?;
        let res = self.check(res)?;
        res.json::<Vec<TaskView>>().await.map_err(|e| DashboardError::Decode(e.to_string()))
    }

    pub async fn add(&self, title: &str) -> Result<TaskView, DashboardError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DashboardError::EmptyTitle);
        }
        let res = self
            .http
            .post(format!("{}/tasks", self.base))
            .json(&json!({ "title": title }))
            .send()
            .await
            .map_err(|e| self.connection_error(e))?;
        let task = self.check(res)?.json::<TaskView>().await.map_err(|e| DashboardError::Decode(e.to_string()))?;
        debug!(id = task.id, "task added");
        Ok(task)
    }

    pub async fn update(&self, id: i32, title: &str, completed: bool) -> Result<TaskView, DashboardError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DashboardError::EmptyTitle);
        }
        let res = self
            .http
            .put(format!("{}/tasks/{}", self.base, id))
            .json(&json!({ "title": title, "completed": completed }))
            .send()
            .await
            .map_err(|e| self.connection_error(e))?;
        self.check(res)?.json::<TaskView>().await.map_err(|e| DashboardError::Decode(e.to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DashboardError> {
        let res = self
            .http
            .delete(format!("{}/tasks/{}", self.base, id))
            .send()
            .await
            .map_err(|e| self.connection_error(e))?;
        self.check(res)?;
        Ok(())
    }

    /// Fetch one task through the full list, the same view the dashboard renders.
    pub async fn find(&self, id: i32) -> Result<TaskView, DashboardError> {
        self.list()
            .await?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or(DashboardError::Status(404))
    }
}
