//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;

/// Emscripten filesystem packager invoker
#[derive(Parser, Debug)]
#[command(
    name = "empack",
    version,
    about = "Package a directory tree into an Emscripten .data file",
    long_about = "Locates the Emscripten file_packager tool and invokes it to package a
directory tree into a .data blob plus its companion .js loader script.

Usage:
  empack ./assets ./out/game.data
  empack --no-config ./assets ./out/game.data
  empack --generate-config ./assets ./out/game.data
  empack --tool /opt/emsdk/upstream/emscripten/tools/file_packager.py ./assets ./out/game.data

Exit code 0 = file_packager ran and reported success."
)]
pub struct Args {
    /// Directory whose contents are packaged at the / mount point
    #[arg(value_name = "SOURCE_DIR")]
    pub source_dir: PathBuf,

    /// Output path for the packaged .data file
    ///
    /// The companion loader script is written next to it, with the final
    /// `.data` suffix replaced by `.js`.
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file: PathBuf,

    /// Skip .emscripten config discovery
    ///
    /// file_packager then falls back to its own default config resolution.
    #[arg(long)]
    pub no_config: bool,

    /// Run `emcc --generate-config` first (best-effort, outcome ignored)
    #[arg(long)]
    pub generate_config: bool,

    /// Explicit path to file_packager, bypassing discovery
    #[arg(long, value_name = "PATH", env = "EMPACK_TOOL")]
    pub tool: Option<PathBuf>,
}

impl Args {
    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.output_file.as_os_str().is_empty() {
            return Err("Output file cannot be empty".to_string());
        }

        if self.output_file.is_dir() {
            return Err(format!(
                "Output file '{}' is a directory",
                self.output_file.display()
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_positionals() {
        assert!(Args::try_parse_from(["empack"]).is_err());
        assert!(Args::try_parse_from(["empack", "./assets"]).is_err());
    }

    #[test]
    fn rejects_extra_positionals() {
        assert!(Args::try_parse_from(["empack", "a", "b", "c"]).is_err());
    }

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from([
            "empack",
            "--no-config",
            "--generate-config",
            "./assets",
            "game.data",
        ])
        .unwrap();
        assert!(args.no_config);
        assert!(args.generate_config);
        assert_eq!(args.source_dir, PathBuf::from("./assets"));
        assert_eq!(args.output_file, PathBuf::from("game.data"));
        assert!(args.validate().is_ok());
    }
}
