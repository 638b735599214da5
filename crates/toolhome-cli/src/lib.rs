#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Integration tests build throwaway PATH directories
#[cfg(test)]
use tempfile as _;

// Only the binary loads `.env`
use dotenvy as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliContext, StderrSink, bootstrap, init_tracing, progress_sink};
pub use commands::{AgentArgs, Commands, ResolveArgs};
pub use error::CliError;
pub use parser::Cli;
