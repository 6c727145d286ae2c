//! file_packager discovery.
//!
//! Probes an ordered candidate list built from the working directory, the
//! `EMSDK` root, and the directory of the `emcc` entry point on PATH. The
//! first candidate that exists on disk wins. Absence is a normal outcome,
//! not an error.

use std::env;
use std::path::PathBuf;

/// Bare name of the packaging tool
pub const TOOL_NAME: &str = "file_packager";

/// Script form of the packaging tool
pub const TOOL_SCRIPT: &str = "file_packager.py";

/// Environment variable pointing at the installed SDK base directory
pub const SDK_ROOT_VAR: &str = "EMSDK";

/// Resolved location of the packaging tool.
///
/// Recomputed every run; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolLocation {
    path: PathBuf,
}

impl ToolLocation {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Python scripts are run through an interpreter, anything else directly.
    pub fn needs_interpreter(&self) -> bool {
        self.path.extension().is_some_and(|ext| ext == "py")
    }
}

/// Locate the file_packager tool.
///
/// Deterministic for a fixed environment and filesystem; no side effects.
/// Returns `None` when no candidate exists, leaving the caller to decide
/// whether that is fatal.
pub fn discover_tool() -> Option<ToolLocation> {
    first_existing(candidate_paths())
}

/// Build the ordered candidate list.
fn candidate_paths() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(TOOL_NAME), PathBuf::from(TOOL_SCRIPT)];

    if let Some(root) = sdk_root() {
        candidates.push(
            root.join("upstream")
                .join("emscripten")
                .join("tools")
                .join(TOOL_SCRIPT),
        );
        // Legacy SDK layout
        candidates.push(
            root.join("emscripten")
                .join("incoming")
                .join("tools")
                .join(TOOL_SCRIPT),
        );
    }

    // Derive a sibling path from the emcc compiler entry point, if any.
    match which::which("emcc") {
        Ok(emcc) => {
            if let Some(dir) = emcc.parent() {
                candidates.push(dir.join("tools").join(TOOL_SCRIPT));
            }
        }
        Err(e) => {
            log::debug!("emcc not found in PATH: {}", e);
        }
    }

    candidates
}

/// SDK root from the environment, ignoring empty values.
pub(crate) fn sdk_root() -> Option<PathBuf> {
    match env::var_os(SDK_ROOT_VAR) {
        Some(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}

fn first_existing(candidates: Vec<PathBuf>) -> Option<ToolLocation> {
    for candidate in candidates {
        if candidate.exists() {
            log::info!("Found {} at: {}", TOOL_NAME, candidate.display());
            return Some(ToolLocation::new(candidate));
        }
        log::debug!("Candidate not present: {}", candidate.display());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_existing_skips_missing_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join(TOOL_SCRIPT);
        std::fs::write(&present, "").unwrap();

        let candidates = vec![
            dir.path().join("missing-one"),
            dir.path().join("missing-two"),
            present.clone(),
            dir.path().join("never-reached"),
        ];
        let found = first_existing(candidates).unwrap();
        assert_eq!(found.path(), present);
    }

    #[test]
    fn first_existing_returns_none_when_nothing_exists() {
        let dir = tempfile::tempdir().unwrap();
        let candidates = vec![dir.path().join("a"), dir.path().join("b")];
        assert!(first_existing(candidates).is_none());
    }

    #[test]
    fn interpreter_needed_only_for_python_scripts() {
        assert!(ToolLocation::new(PathBuf::from("tools/file_packager.py")).needs_interpreter());
        assert!(!ToolLocation::new(PathBuf::from("file_packager")).needs_interpreter());
    }
}
