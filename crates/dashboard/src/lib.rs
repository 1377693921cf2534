//! Terminal dashboard for the task service.
//!
//! Every mutation is followed by a full re-fetch of `/tasks`; the dashboard
//! keeps no local copy between commands.

pub mod cli;
pub mod client;
pub mod errors;
pub mod render;
pub mod stats;
