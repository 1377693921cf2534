use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("cannot connect to the task server at {base}: {reason}")]
    Connection { base: String, reason: String },
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("task title cannot be empty")]
    EmptyTitle,
}
