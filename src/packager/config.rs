//! Emscripten config file discovery and best-effort generation.
//!
//! A discoverable `.emscripten` file is forwarded to the child process via
//! `EM_CONFIG`. Absence is not an error: file_packager falls back to its
//! own default config resolution.

use std::path::PathBuf;
use std::process::Stdio;

use super::discovery;

/// Environment variable the child reads for a config override
pub const CONFIG_VAR: &str = "EM_CONFIG";

/// Config file name under each candidate directory
const CONFIG_FILE: &str = ".emscripten";

/// Locate an Emscripten config file, first existing candidate wins.
pub fn discover_config() -> Option<PathBuf> {
    for candidate in config_candidates() {
        if candidate.exists() {
            log::info!("Found Emscripten config: {}", candidate.display());
            return Some(candidate);
        }
        log::debug!("Config candidate not present: {}", candidate.display());
    }
    None
}

/// Candidate config paths, in probe order: next to the symlink-resolved
/// emcc, under the SDK root, then in the home directory.
fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(emcc) = which::which("emcc") {
        match std::fs::canonicalize(&emcc) {
            Ok(real) => {
                if let Some(dir) = real.parent() {
                    candidates.push(dir.join(CONFIG_FILE));
                }
            }
            Err(e) => {
                log::debug!("Could not resolve {}: {}", emcc.display(), e);
            }
        }
    }

    if let Some(root) = discovery::sdk_root() {
        candidates.push(root.join(CONFIG_FILE));
    }

    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(CONFIG_FILE));
    }

    candidates
}

/// Ask emcc to generate its default config file.
///
/// Best-effort, non-load-bearing: the outcome is ignored and output is
/// suppressed. Runs before discovery so a freshly generated file can be
/// picked up, but nothing downstream depends on it succeeding.
pub async fn generate_config() {
    let result = tokio::process::Command::new("emcc")
        .arg("--generate-config")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await;

    match result {
        Ok(status) if status.success() => {
            log::debug!("emcc --generate-config completed");
        }
        Ok(status) => {
            log::warn!("emcc --generate-config exited with {}", status);
        }
        Err(e) => {
            log::warn!("emcc --generate-config could not run: {}", e);
        }
    }
}
