//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No process or filesystem details in any signature
//! - Paths cross ports as strings or [`AgentPath`](crate::AgentPath)
//! - Failures that callers must tell apart get their own variant

pub mod agent;
pub mod diagnostic_sink;

pub use agent::{AgentPort, DispatchError};
pub use diagnostic_sink::{BufferedSink, DiagnosticSink, NoopSink, TracingSink};
