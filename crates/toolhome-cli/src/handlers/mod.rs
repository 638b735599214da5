//! Command handlers.
//!
//! Thin wrappers: build the request from arguments, call the library, print
//! the single result line to stdout. Everything else goes to stderr.

pub mod agent;
pub mod locate;
pub mod resolve;
