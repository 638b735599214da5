#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod env;
mod fs;
mod locate;
mod search;

pub use env::{EnvProvider, SystemEnv};
pub use fs::{FsProvider, SystemFs};
pub use locate::PathExecutableLocator;
pub use search::{DEFAULT_EXECUTABLE_EXTENSIONS, PathSearcher, SearchPath, executable_extensions};

#[cfg(test)]
pub use env::MockEnv;
#[cfg(test)]
pub use fs::MockFs;

// Only the integration tests touch a real filesystem
#[cfg(test)]
use tempfile as _;
