//! Invoker library for the Emscripten file_packager tool.
//!
//! Resolves the path to the external packaging executable, resolves an
//! optional `.emscripten` config file, and runs the tool as a subprocess
//! with a source directory and an output filename.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod packager;

// Re-export commonly used types
pub use error::{PackagerError, Result};
pub use packager::{PackageRequest, package_filesystem};
