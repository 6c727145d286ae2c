//! Error types for packager invocation.
//!
//! Discovery misses are not errors: absence of the tool or config file is
//! modeled as `Option` at the discovery layer, and only the orchestrator
//! turns a missing tool into [`PackagerError::ToolNotFound`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for packager operations
pub type Result<T> = std::result::Result<T, PackagerError>;

/// Main error type for all packager operations
#[derive(Error, Debug)]
pub enum PackagerError {
    /// Source directory does not exist on disk
    #[error("Source directory '{}' does not exist", path.display())]
    MissingSourceDir {
        /// Path that was checked
        path: PathBuf,
    },

    /// file_packager could not be located after probing all candidates
    #[error(
        "file_packager not found. Make sure Emscripten is installed and in PATH\n\
         \n\
         You can find it at:\n\
         \x20 $EMSDK/upstream/emscripten/tools/file_packager.py\n\
         \n\
         Make sure to activate Emscripten SDK:\n\
         \x20 source $EMSDK/emsdk_env.sh"
    )]
    ToolNotFound,

    /// Subprocess could not be started (missing interpreter or binary)
    #[error("Failed to start {command}: {error}")]
    CommandFailed {
        /// Command that failed to spawn
        command: String,
        /// Underlying spawn error
        #[source]
        error: std::io::Error,
    },

    /// Subprocess ran and returned a non-zero status
    #[error("file_packager failed with {status}")]
    ToolExited {
        /// Exit status reported by the child
        status: std::process::ExitStatus,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
