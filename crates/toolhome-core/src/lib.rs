#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    AgentPath, Attempt, AttemptOutcome, ExecutableNotFound, InstallerConfig, LocateJob,
    PathStyle, ToolHomeResolution, fix_empty,
};
pub use ports::{
    AgentPort, BufferedSink, DiagnosticSink, DispatchError, NoopSink, TracingSink,
};
pub use services::{ResolveError, ToolHomeService};

// serde_json is only exercised by wire-format tests
#[cfg(test)]
use serde_json as _;
