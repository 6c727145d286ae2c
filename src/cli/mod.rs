//! Command line interface for the packager invoker.

mod args;

pub use args::Args;

use crate::error::Result;
use crate::packager::{self, PackageRequest};
use clap::Parser;

/// Main CLI entry point
///
/// Returns the process exit code. Every failure path maps to exit code 1,
/// including argument parse failures (clap's default of 2 is overridden to
/// honor the documented exit-code contract).
pub async fn run() -> Result<i32> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Render clap's own message (usage or --help/--version text)
            e.print().ok();
            return Ok(if e.use_stderr() { 1 } else { 0 });
        }
    };

    if let Err(reason) = args.validate() {
        eprintln!("Error: {}", reason);
        return Ok(1);
    }

    let request = PackageRequest {
        source_dir: args.source_dir,
        output_file: args.output_file,
        discover_config: !args.no_config,
        generate_config: args.generate_config,
        tool_override: args.tool,
    };

    match packager::package_filesystem(&request).await {
        Ok(()) => Ok(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            Ok(1)
        }
    }
}
