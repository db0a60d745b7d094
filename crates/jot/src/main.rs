//! # Jot CLI
//!
//! The binary is intentionally thin: everything lives in `cli/` and this file
//! only calls `cli::run()` and handles process termination.
//!
//! ```text
//! cli/setup.rs     clap argument definitions
//! cli/commands.rs  context wiring, turning subcommands into Intents
//! cli/render.rs    drawing RenderState and messages on stdout
//! ```
//!
//! The CLI plays the roles the library leaves open: it captures input from the
//! command line, asks for delete confirmation on stdin and is the render sink.
//! All note logic stays behind `jotapp::api::JotApi`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
