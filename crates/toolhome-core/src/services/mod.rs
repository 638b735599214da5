//! Core services.
//!
//! Services hold the orchestration logic and depend only on ports.

mod tool_home;

pub use tool_home::{ResolveError, ToolHomeService};
