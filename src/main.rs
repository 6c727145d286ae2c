//! empack - Emscripten filesystem packager invoker.
//!
//! This binary locates the Emscripten file_packager tool, optionally
//! discovers an Emscripten config file, and invokes the tool to package a
//! directory tree into a .data blob plus its companion loader script.

mod cli;
mod error;
mod packager;

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
