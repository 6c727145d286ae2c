//! Packaging pipeline: precondition check, tool discovery, optional config
//! discovery, then one blocking file_packager invocation.
//!
//! # Module Organization
//!
//! - `discovery` - file_packager candidate probing
//! - `config` - .emscripten discovery and best-effort generation
//! - `invoke` - argument-vector construction and subprocess execution

mod config;
mod discovery;
mod invoke;

pub use config::CONFIG_VAR;
pub use discovery::{SDK_ROOT_VAR, ToolLocation, discover_tool};
pub use invoke::companion_script_path;

use std::path::PathBuf;

use crate::error::{PackagerError, Result};

/// One packaging run, created from command-line input and immutable for the
/// run's duration.
#[derive(Debug, Clone)]
pub struct PackageRequest {
    /// Directory packaged at the `/` mount point
    pub source_dir: PathBuf,
    /// Output path for the `.data` file
    pub output_file: PathBuf,
    /// Probe for a `.emscripten` config and forward it via `EM_CONFIG`
    pub discover_config: bool,
    /// Run the best-effort `emcc --generate-config` warm-up first
    pub generate_config: bool,
    /// Explicit tool path, bypassing discovery
    pub tool_override: Option<PathBuf>,
}

/// Package `source_dir` into `output_file` plus its companion script.
///
/// Linear pipeline, no retries: validate the source directory, resolve the
/// tool, optionally resolve a config override, run the tool once.
pub async fn package_filesystem(request: &PackageRequest) -> Result<()> {
    if !request.source_dir.exists() {
        return Err(PackagerError::MissingSourceDir {
            path: request.source_dir.clone(),
        });
    }

    if request.generate_config {
        // Best-effort warm-up so the config file may already exist below.
        config::generate_config().await;
    }

    let tool = match &request.tool_override {
        Some(path) => {
            if !path.exists() {
                log::debug!("Explicit tool path not present: {}", path.display());
                return Err(PackagerError::ToolNotFound);
            }
            ToolLocation::new(path.clone())
        }
        None => discovery::discover_tool().ok_or(PackagerError::ToolNotFound)?,
    };

    println!("Using file_packager: {}", tool.path().display());
    println!(
        "Packaging {} into {}...",
        request.source_dir.display(),
        request.output_file.display()
    );

    let em_config = if request.discover_config {
        config::discover_config()
    } else {
        None
    };

    invoke::run_packager(
        &tool,
        &request.source_dir,
        &request.output_file,
        em_config.as_deref(),
    )
    .await?;

    println!("Successfully packaged filesystem");
    Ok(())
}
