//! file_packager command construction and execution.

use std::path::{Path, PathBuf};

use crate::error::{PackagerError, Result};

use super::config::CONFIG_VAR;
use super::discovery::ToolLocation;

/// Derive the companion loader script path from the output data path.
///
/// Pure string transform: the final `.data` suffix becomes `.js`; a path
/// without that suffix gets `.js` appended.
pub fn companion_script_path(output_file: &Path) -> PathBuf {
    let raw = output_file.to_string_lossy();
    match raw.strip_suffix(".data") {
        Some(stem) => PathBuf::from(format!("{}.js", stem)),
        None => PathBuf::from(format!("{}.js", raw)),
    }
}

/// Run file_packager on `source_dir`, producing `output_file` and its
/// companion script.
///
/// The source directory is preloaded at the `/` mount point. The child
/// inherits stdout/stderr and the parent environment; a discovered config
/// path is added to the child environment only, never to the parent's.
/// Blocks until the tool exits.
pub async fn run_packager(
    tool: &ToolLocation,
    source_dir: &Path,
    output_file: &Path,
    config: Option<&Path>,
) -> Result<()> {
    let js_output = companion_script_path(output_file);

    let (command_name, mut command) = if tool.needs_interpreter() {
        let mut command = tokio::process::Command::new("python3");
        command.arg(tool.path());
        ("python3".to_string(), command)
    } else {
        // A bare name would trigger a PATH search at spawn time; pin it to
        // the working directory the existence probe actually checked.
        let program = if tool.path().components().count() == 1 {
            Path::new(".").join(tool.path())
        } else {
            tool.path().to_path_buf()
        };
        (
            program.display().to_string(),
            tokio::process::Command::new(program),
        )
    };

    command
        .arg(output_file)
        .arg("--preload")
        .arg(format!("{}@/", source_dir.display()))
        .arg(format!("--js-output={}", js_output.display()));

    if let Some(config) = config {
        command.env(CONFIG_VAR, config);
    }

    let status = command
        .status()
        .await
        .map_err(|error| PackagerError::CommandFailed {
            command: command_name,
            error,
        })?;

    if !status.success() {
        return Err(PackagerError::ToolExited { status });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_final_data_suffix() {
        assert_eq!(
            companion_script_path(Path::new("game.data")),
            PathBuf::from("game.js")
        );
        assert_eq!(
            companion_script_path(Path::new("x.data.data")),
            PathBuf::from("x.data.js")
        );
    }

    #[test]
    fn keeps_directory_components() {
        assert_eq!(
            companion_script_path(Path::new("./out/game.data")),
            PathBuf::from("./out/game.js")
        );
    }

    #[test]
    fn appends_js_without_data_suffix() {
        assert_eq!(
            companion_script_path(Path::new("bundle.bin")),
            PathBuf::from("bundle.bin.js")
        );
    }
}
