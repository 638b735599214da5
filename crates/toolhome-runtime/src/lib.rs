#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod agents;
mod error;
pub mod protocol;
mod server;

pub use agents::{CommandAgent, LocalAgent};
pub use error::AgentError;
pub use protocol::{AgentReply, AgentRequest};
pub use server::serve_agent;
