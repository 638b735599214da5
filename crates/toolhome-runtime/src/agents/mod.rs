//! `AgentPort` implementations.

mod command;
mod local;

pub use command::CommandAgent;
pub use local::LocalAgent;

pub(crate) use local::{locate_blocking, probe_root};
