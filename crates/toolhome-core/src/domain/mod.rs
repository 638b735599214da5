//! Domain types for tool home resolution.
//!
//! Everything here is plain data: no filesystem access, no process spawning.
//! Types that cross the agent boundary derive `Serialize`/`Deserialize` and
//! keep paths as strings, since the agent and the caller may disagree on
//! path syntax.

mod config;
mod locate;
mod path;

pub use config::{InstallerConfig, fix_empty};
pub use locate::{Attempt, AttemptOutcome, ExecutableNotFound, LocateJob, ToolHomeResolution};
pub use path::{AgentPath, PathStyle};
